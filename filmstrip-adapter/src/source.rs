use std::future::Future;

use filmstrip::ImageRecord;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

use crate::{GalleryError, Result, SourceConfig};

/// Something that can produce the gallery's images, once, asynchronously.
pub trait PhotoSource {
    /// Fetches the ordered image sequence. Order is display order.
    fn load(&self) -> impl Future<Output = Result<Vec<ImageRecord>>>;
}

/// Photo search over HTTP (Pexels `GET /v1/search`).
#[derive(Clone, Debug)]
pub struct PexelsSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl PexelsSource {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(GalleryError::client_setup)?;
        Ok(Self { client, config })
    }

    /// Shorthand for `PexelsSource::new(SourceConfig::from_env()?)`.
    pub fn from_env() -> Result<Self> {
        Self::new(SourceConfig::from_env()?)
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Builds the search request without sending it.
    pub fn request(&self) -> Result<reqwest::Request> {
        let request = self
            .client
            .get(self.config.endpoint().clone())
            .query(&self.config.query().params())
            .header(AUTHORIZATION, self.config.api_key().clone())
            .build()?;
        Ok(request)
    }
}

impl PhotoSource for PexelsSource {
    async fn load(&self) -> Result<Vec<ImageRecord>> {
        let request = self.request()?;
        fdebug!(url = %request.url(), "fetching photos");

        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            fwarn!(status = status.as_u16(), "photo search rejected the request");
            return Err(GalleryError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let images = parse_search_response(&body)?;
        finfo!(count = images.len(), "photos fetched");
        Ok(images)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    photos: Option<Vec<Photo>>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: Option<PhotoSrc>,
    photographer: Option<String>,
    alt: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct PhotoSrc {
    portrait: Option<String>,
    small: Option<String>,
    tiny: Option<String>,
}

/// Decodes a search response body into image records, in response order.
///
/// Fails when the body is not JSON, has no `photos` array, or a photo has no `src.portrait`.
pub fn parse_search_response(body: &[u8]) -> Result<Vec<ImageRecord>> {
    let response: SearchResponse = serde_json::from_slice(body)?;
    let photos = response
        .photos
        .ok_or_else(|| GalleryError::malformed("missing `photos` array"))?;

    photos
        .into_iter()
        .enumerate()
        .map(|(i, photo)| {
            let src = photo
                .src
                .ok_or_else(|| GalleryError::malformed(format!("photo {i} has no `src`")))?;
            let url = non_empty(src.portrait).ok_or_else(|| {
                GalleryError::malformed(format!("photo {i} has no `src.portrait` URL"))
            })?;
            Ok(ImageRecord {
                url,
                thumbnail_url: non_empty(src.small).or_else(|| non_empty(src.tiny)),
                photographer: photo.photographer,
                alt: non_empty(photo.alt),
                width: photo.width,
                height: photo.height,
            })
        })
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

use thiserror::Error;

pub type Result<T, E = GalleryError> = core::result::Result<T, E>;

/// Why a gallery load failed.
///
/// Every variant is terminal for the load attempt: the gallery is left empty and nothing is
/// retried.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The API key (or another setting) is missing or unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request could not be sent or the response body could not be read.
    #[error("request to photo search failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("photo search returned HTTP {status}")]
    Status { status: u16 },

    /// The payload did not have the expected shape.
    #[error("malformed photo search response: {reason}")]
    MalformedResponse {
        reason: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Coarse classification of [`GalleryError`] for UIs that map failures to messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    Network,
    MalformedResponse,
}

impl GalleryError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// The HTTP client itself could not be built (for example the TLS backend failed).
    pub(crate) fn client_setup(source: reqwest::Error) -> Self {
        Self::Configuration(format!("could not build the HTTP client: {source}"))
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
            source: None,
        }
    }

    /// HTTP status errors count as network failures.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Network(_) | Self::Status { .. } => ErrorKind::Network,
            Self::MalformedResponse { .. } => ErrorKind::MalformedResponse,
        }
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(source: serde_json::Error) -> Self {
        Self::MalformedResponse {
            reason: source.to_string(),
            source: Some(source),
        }
    }
}

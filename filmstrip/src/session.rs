use alloc::vec::Vec;

use crate::{ImageRecord, ListScroller, SyncOptions, SyncUpdate, Synchronizer, Thumbnail};

/// The state of one gallery screen: the ordered images plus the synchronizer.
///
/// Created when the screen mounts and dropped when it unmounts. The image sequence is
/// replaced as a whole; readers never see a partially loaded gallery.
#[derive(Clone, Debug)]
pub struct GallerySession<L> {
    images: Vec<ImageRecord>,
    sync: Synchronizer<L>,
}

impl<L: ListScroller> GallerySession<L> {
    pub fn new(options: SyncOptions, lists: L) -> Self {
        Self {
            images: Vec::new(),
            sync: Synchronizer::new(options, lists),
        }
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.images.get(index)
    }

    /// Replaces the image sequence. Order is display order.
    ///
    /// The active index is not changed and neither list is scrolled.
    pub fn set_images(&mut self, images: Vec<ImageRecord>) {
        fdebug!(count = images.len(), "GallerySession::set_images");
        self.sync.set_count(images.len());
        self.images = images;
    }

    pub fn clear_images(&mut self) {
        self.set_images(Vec::new());
    }

    pub fn active_index(&self) -> Option<usize> {
        self.sync.active_index()
    }

    pub fn active_image(&self) -> Option<&ImageRecord> {
        self.active_index().and_then(|i| self.images.get(i))
    }

    /// See [`Synchronizer::select_index`].
    pub fn select_index(&mut self, index: usize) -> Option<SyncUpdate> {
        self.sync.select_index(index)
    }

    /// See [`Synchronizer::on_primary_settled`].
    pub fn on_primary_settled(&mut self, scroll_offset: f64) -> Option<SyncUpdate> {
        self.sync.on_primary_settled(scroll_offset)
    }

    /// Emits the thumbnails to render at strip offset `scroll_offset`, paired with their image.
    pub fn for_each_thumbnail(
        &self,
        scroll_offset: f64,
        mut f: impl FnMut(Thumbnail, &ImageRecord),
    ) {
        let strip = self.sync.strip();
        let overscan = self.sync.options().overscan;
        strip.for_each_thumbnail(scroll_offset, overscan, self.active_index(), |thumb| {
            if let Some(image) = self.images.get(thumb.index) {
                f(thumb, image);
            }
        });
    }

    pub fn sync(&self) -> &Synchronizer<L> {
        &self.sync
    }

    pub fn sync_mut(&mut self) -> &mut Synchronizer<L> {
        &mut self.sync
    }
}

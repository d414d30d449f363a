use filmstrip::{GallerySession, ImageRecord, ListScroller, SyncOptions};

use crate::{GalleryError, PhotoSource, Result};

/// Where the gallery's one load stands.
#[derive(Debug, Default)]
pub enum LoadState {
    /// No load has been started.
    #[default]
    Idle,
    Loading,
    /// Images are in the session (possibly zero of them).
    Ready,
    /// The load failed; the gallery is empty.
    Failed(GalleryError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn error(&self) -> Option<&GalleryError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Identifies one load attempt. Results are only applied for the latest ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// A [`GallerySession`] plus its load lifecycle.
///
/// The load is split in two so the fetch can run wherever the host runs futures:
///
/// ```ignore
/// let ticket = gallery.begin_load();
/// let result = source.load().await;
/// gallery.finish_load(ticket, result);
/// ```
///
/// After [`Gallery::close`] (screen teardown) or a newer `begin_load`, late results are
/// dropped instead of touching the session.
#[derive(Debug)]
pub struct Gallery<L> {
    session: GallerySession<L>,
    state: LoadState,
    generation: u64,
    closed: bool,
}

impl<L: ListScroller> Gallery<L> {
    pub fn new(options: SyncOptions, lists: L) -> Self {
        Self::from_session(GallerySession::new(options, lists))
    }

    pub fn from_session(session: GallerySession<L>) -> Self {
        Self {
            session,
            state: LoadState::Idle,
            generation: 0,
            closed: false,
        }
    }

    pub fn session(&self) -> &GallerySession<L> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GallerySession<L> {
        &mut self.session
    }

    pub fn load_state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Starts a load attempt, superseding any earlier one.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        if !self.closed {
            self.state = LoadState::Loading;
        }
        fdebug!(generation = self.generation, "load started");
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Applies a load result. Returns `false` if it was discarded as stale.
    ///
    /// On success the image sequence is replaced in one step. On failure the gallery is left
    /// empty and the error is kept in [`Gallery::load_state`].
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<ImageRecord>>) -> bool {
        if self.closed {
            fdebug!(
                generation = ticket.generation,
                "gallery closed; dropping load result"
            );
            return false;
        }
        if ticket.generation != self.generation {
            fdebug!(
                generation = ticket.generation,
                current = self.generation,
                "superseded load; dropping result"
            );
            return false;
        }

        match result {
            Ok(images) => {
                finfo!(count = images.len(), "gallery loaded");
                self.session.set_images(images);
                self.state = LoadState::Ready;
            }
            Err(err) => {
                fwarn!(error = %err, "gallery load failed");
                self.session.clear_images();
                self.state = LoadState::Failed(err);
            }
        }
        true
    }

    /// Runs one load against `source` and applies the result.
    pub async fn load_with<S: PhotoSource>(&mut self, source: &S) -> bool {
        let ticket = self.begin_load();
        let result = source.load().await;
        self.finish_load(ticket, result)
    }

    /// Tears the gallery down. Results of loads still in flight will be discarded.
    pub fn close(&mut self) {
        if !self.closed {
            fdebug!("gallery closed");
        }
        self.closed = true;
    }
}

//! Extraction pipeline and session lifecycle.
//!
//! [`ArchiveViewer`] is the coordination layer between the presentation
//! shell and the external streaming decoder. It owns the decoder session,
//! the resource cache, and the single now-playing audio slot, and moves
//! through three states:
//!
//! ```text
//! Uninitialized --initialize--> Ready --dispose--> Disposed
//! ```
//!
//! Only `initialize` is valid while `Uninitialized`; listing and extraction
//! require `Ready`; after `dispose` every session operation fails with
//! [`ViewerError::NotInitialized`]. Entry points are sequential by design
//! (one extraction awaited to completion before the next), which is what
//! keeps the cache's one-resource-per-path invariant lock-free.

use tracing::debug;

use crate::bytes;
use crate::cache::{CachedResource, ResourceCache, ResourceHandle};
use crate::decoder::{ArchiveEntry, DecoderSession, StreamingDecoder};
use crate::error::{Result, ViewerError};
use crate::media::{self, MediaKind};

enum SessionState<S> {
    Uninitialized,
    Ready(S),
    Disposed,
}

/// Coordination layer over one archive at a time.
///
/// Generic over the decoder implementation, mirroring how the rest of the
/// crate never names a concrete decoder.
pub struct ArchiveViewer<D: StreamingDecoder> {
    decoder: D,
    state: SessionState<D::Session>,
    cache: ResourceCache,
    now_playing: Option<ResourceHandle>,
}

impl<D: StreamingDecoder> ArchiveViewer<D> {
    pub fn new(decoder: D) -> Self {
        Self {
            decoder,
            state: SessionState::Uninitialized,
            cache: ResourceCache::new(),
            now_playing: None,
        }
    }

    /// Bind a fresh decoder session over `compressed`.
    ///
    /// Clears the resource cache (releasing every cached handle) and the
    /// playback slot before anything else, so no lookup can observe
    /// resources from a previous archive. Re-entrant: calling it again
    /// while `Ready` drops the old session and rebinds.
    pub async fn initialize(&mut self, compressed: Vec<u8>) -> Result<()> {
        self.now_playing = None;
        self.cache.clear();

        self.decoder.init().await.map_err(ViewerError::Decoder)?;
        let session = self
            .decoder
            .open_session(compressed)
            .map_err(ViewerError::Decoder)?;
        self.state = SessionState::Ready(session);

        Ok(())
    }

    fn session_mut(&mut self) -> Result<&mut D::Session> {
        match &mut self.state {
            SessionState::Ready(session) => Ok(session),
            SessionState::Uninitialized | SessionState::Disposed => {
                Err(ViewerError::NotInitialized)
            }
        }
    }

    /// List the archive's entries with their sizes.
    pub async fn list_entries(&mut self) -> Result<Vec<ArchiveEntry>> {
        self.session_mut()?
            .list_entries()
            .await
            .map_err(ViewerError::Decoder)
    }

    /// List entry paths only, in the decoder's order.
    pub async fn list_paths(&mut self) -> Result<Vec<String>> {
        let entries = self.list_entries().await?;
        Ok(entries.into_iter().map(|e| e.path).collect())
    }

    /// Extract `path` and prepare it for display.
    ///
    /// Cache hits return the previously prepared resource without touching
    /// the decoder; the returned clone shares the cached handle, so repeated
    /// calls for one path observe one handle. On a miss the pipeline runs
    /// classification, decoder extraction, container validation, and handle
    /// allocation — in that order, so an unsupported extension never costs a
    /// decoder call and a failed validation never leaks a handle. No cache
    /// entry is written on any failure path.
    pub async fn extract(&mut self, path: &str) -> Result<CachedResource> {
        if let Some(cached) = self.cache.get(path) {
            debug!(path, handle = cached.handle().uri(), "resource cache hit");
            return Ok(cached.clone());
        }

        let kind = {
            // Fail NotInitialized ahead of classification so a disposed
            // viewer reports its state, not the path's extension.
            self.session_mut()?;
            MediaKind::from_path(path)?
        };

        let raw = self
            .session_mut()?
            .extract_entry(path)
            .await
            .map_err(ViewerError::Decoder)?;
        if raw.is_empty() {
            return Err(ViewerError::EmptyExtraction { path: path.to_owned() });
        }

        let effective = match kind {
            MediaKind::Image => Self::realign_image(path, raw)?,
            MediaKind::Audio => raw,
        };

        let handle = ResourceHandle::allocate(kind);
        let resource = CachedResource::new(effective, handle, kind);
        self.cache.put(path.to_owned(), resource.clone());

        Ok(resource)
    }

    /// Realign WebP bytes so the RIFF signature sits at offset 0.
    ///
    /// Shifts in place rather than reslicing, since the pipeline owns the
    /// buffer anyway.
    fn realign_image(path: &str, mut raw: Vec<u8>) -> Result<Vec<u8>> {
        let offset = media::find_riff_header(&raw)?;
        if offset > 0 {
            raw.drain(..offset);
        }

        let preview = &raw[..raw.len().min(32)];
        debug!(
            path,
            offset,
            riff_size = bytes::read_le32(&raw, 4),
            head_hex = %bytes::to_hex(preview),
            head_ascii = %bytes::to_ascii(preview),
            "validated webp container"
        );

        Ok(raw)
    }

    /// Record the audio resource the presentation layer is about to play.
    ///
    /// There is a single playback slot; binding a new resource replaces the
    /// previous occupant. Image resources are ignored.
    pub fn set_now_playing(&mut self, resource: &CachedResource) {
        if resource.kind() == MediaKind::Audio {
            self.now_playing = Some(resource.handle().clone());
        }
    }

    pub fn now_playing(&self) -> Option<&ResourceHandle> {
        self.now_playing.as_ref()
    }

    /// Tear the viewer down: drop the playback slot, release every cached
    /// handle, and drop the decoder session. Terminal; subsequent session
    /// operations fail with [`ViewerError::NotInitialized`].
    pub fn dispose(&mut self) {
        self.now_playing = None;
        self.cache.clear();
        self.state = SessionState::Disposed;
    }

    /// Number of resources currently cached. Diagnostic only.
    pub fn cached_resources(&self) -> usize {
        self.cache.len()
    }
}

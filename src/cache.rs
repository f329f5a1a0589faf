//! Resource cache and the ephemeral handle type it owns.
//!
//! Each successfully extracted entry becomes one [`CachedResource`] holding
//! the validated bytes, a display-ready [`ResourceHandle`], and the media
//! kind. The cache owns resource lifetimes: a handle stays valid until the
//! cache is cleared (archive re-initialization or teardown), at which point
//! every handle is released before the entries are dropped.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tracing::debug;

use crate::media::MediaKind;

/// Serial source for handle URIs, unique across the process.
static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque, shared reference to in-memory display bytes.
///
/// Stands in for a browser object URL: the `mem://<mime>/<serial>` URI is
/// stable for the handle's lifetime and suitable for direct binding to an
/// image or audio element's source. Clones share one release flag, so
/// releasing any clone releases them all.
#[derive(Debug, Clone)]
pub struct ResourceHandle {
    inner: Arc<HandleInner>,
}

#[derive(Debug)]
struct HandleInner {
    uri: String,
    released: AtomicBool,
}

impl ResourceHandle {
    pub(crate) fn allocate(kind: MediaKind) -> Self {
        let id = NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            inner: Arc::new(HandleInner {
                uri: format!("mem://{}/{id}", kind.mime()),
                released: AtomicBool::new(false),
            }),
        }
    }

    /// The handle's URI, tagged with the resource's canonical MIME type.
    pub fn uri(&self) -> &str {
        &self.inner.uri
    }

    /// Release the handle. Idempotent; observable through every clone.
    pub fn release(&self) {
        self.inner.released.store(true, Ordering::Release);
    }

    pub fn is_released(&self) -> bool {
        self.inner.released.load(Ordering::Acquire)
    }
}

impl PartialEq for ResourceHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for ResourceHandle {}

/// One displayable resource produced from a single archive entry.
///
/// Cheap to clone: the bytes and handle are shared, so a clone returned to a
/// caller observes the same handle the cache owns.
#[derive(Debug, Clone)]
pub struct CachedResource {
    bytes: Arc<[u8]>,
    handle: ResourceHandle,
    kind: MediaKind,
}

impl CachedResource {
    pub(crate) fn new(bytes: Vec<u8>, handle: ResourceHandle, kind: MediaKind) -> Self {
        Self {
            bytes: bytes.into(),
            handle,
            kind,
        }
    }

    /// The validated, display-ready bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn handle(&self) -> &ResourceHandle {
        &self.handle
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }
}

/// Path-keyed store of extracted resources.
///
/// Unbounded; holds at most one resource per path. Mutation is expected only
/// through the viewer's sequential entry points, so no interior locking.
#[derive(Debug, Default)]
pub struct ResourceCache {
    entries: HashMap<String, CachedResource>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&CachedResource> {
        self.entries.get(path)
    }

    pub fn put(&mut self, path: String, resource: CachedResource) {
        self.entries.insert(path, resource);
    }

    /// Drop every entry, releasing each resource's handle first. Skipping
    /// the release would leak the display resources backing the handles.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            debug!(entries = self.entries.len(), "clearing resource cache");
        }
        for resource in self.entries.values() {
            resource.handle().release();
        }
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(kind: MediaKind) -> CachedResource {
        CachedResource::new(vec![1, 2, 3], ResourceHandle::allocate(kind), kind)
    }

    #[test]
    fn handle_uri_carries_mime_tag() {
        let handle = ResourceHandle::allocate(MediaKind::Image);
        assert!(handle.uri().starts_with("mem://image/webp/"));

        let handle = ResourceHandle::allocate(MediaKind::Audio);
        assert!(handle.uri().starts_with("mem://audio/ogg/"));
    }

    #[test]
    fn handle_uris_are_unique() {
        let a = ResourceHandle::allocate(MediaKind::Image);
        let b = ResourceHandle::allocate(MediaKind::Image);
        assert_ne!(a.uri(), b.uri());
        assert_ne!(a, b);
    }

    #[test]
    fn release_is_visible_through_clones() {
        let handle = ResourceHandle::allocate(MediaKind::Audio);
        let clone = handle.clone();
        assert!(!clone.is_released());

        handle.release();
        assert!(clone.is_released());
        assert_eq!(handle, clone);
    }

    #[test]
    fn put_then_get_returns_same_resource() {
        let mut cache = ResourceCache::new();
        let res = resource(MediaKind::Image);
        cache.put("a.webp".into(), res.clone());

        let got = cache.get("a.webp").unwrap();
        assert_eq!(got.handle(), res.handle());
        assert_eq!(got.bytes(), res.bytes());
        assert!(cache.get("missing.webp").is_none());
    }

    #[test]
    fn put_replaces_previous_entry_for_path() {
        let mut cache = ResourceCache::new();
        cache.put("a.webp".into(), resource(MediaKind::Image));
        cache.put("a.webp".into(), resource(MediaKind::Image));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_releases_all_handles() {
        let mut cache = ResourceCache::new();
        let image = resource(MediaKind::Image);
        let audio = resource(MediaKind::Audio);
        cache.put("a.webp".into(), image.clone());
        cache.put("b.ogg".into(), audio.clone());

        cache.clear();

        assert!(cache.is_empty());
        assert!(image.handle().is_released());
        assert!(audio.handle().is_released());
    }
}

//! Seam to the external streaming decoder.
//!
//! Decompression and archive-format parsing live outside this crate; the
//! viewer only needs a way to bootstrap the decoder runtime, bind a session
//! over compressed bytes, and ask that session for entries. The traits here
//! capture exactly that contract, so the same pipeline works against a wasm
//! decoder, a native one, or a test double.

use anyhow::Result;
use async_trait::async_trait;

/// One named, sized entry inside the archive, as reported by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: String,
    pub size: u64,
}

/// The decoder runtime: bootstrap plus session construction.
#[async_trait]
pub trait StreamingDecoder: Send + Sync {
    type Session: DecoderSession;

    /// One-time runtime bootstrap. Must complete before a session is opened;
    /// the viewer awaits it on every `initialize`.
    async fn init(&self) -> Result<()>;

    /// Bind a decoder session over the compressed archive bytes, taking
    /// ownership of the buffer. Synchronous by contract.
    fn open_session(&self, compressed: Vec<u8>) -> Result<Self::Session>;
}

/// A decoder session bound to one archive's compressed bytes.
#[async_trait]
pub trait DecoderSession: Send + Sync {
    /// List the archive's entries. Ordering is whatever the decoder
    /// produces; the viewer does not rely on it beyond display order.
    async fn list_entries(&mut self) -> Result<Vec<ArchiveEntry>>;

    /// Extract the raw bytes for one entry. Fails for unknown paths; the
    /// viewer does not pre-validate existence.
    async fn extract_entry(&mut self, path: &str) -> Result<Vec<u8>>;
}

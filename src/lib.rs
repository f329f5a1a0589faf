//! # zstdview
//!
//! Media extraction, validation and caching layer for compressed-archive
//! viewers.
//!
//! This library is the coordination core of an archive previewer: the user
//! opens a compressed archive, the external streaming decoder lists and
//! extracts entries, and this crate turns raw extracted bytes into
//! display-ready resources. Decompression and archive-format parsing stay on
//! the decoder's side of the [`decoder`] seam; DOM wiring stays on the
//! presentation layer's side of [`ArchiveViewer`].
//!
//! ## Features
//!
//! - Extension-based media classification (WebP images, Ogg audio)
//! - RIFF container realignment for WebP payloads whose framing does not
//!   start at offset 0
//! - Path-keyed resource cache with explicit handle release on teardown
//! - `Uninitialized -> Ready -> Disposed` session lifecycle over any
//!   [`StreamingDecoder`] implementation
//!
//! ## Example
//!
//! ```ignore
//! use zstdview::ArchiveViewer;
//!
//! // `decoder` implements zstdview::StreamingDecoder.
//! let mut viewer = ArchiveViewer::new(decoder);
//! viewer.initialize(compressed_bytes).await?;
//!
//! for path in viewer.list_paths().await? {
//!     println!("{path}");
//! }
//!
//! // Prepare one entry for display; repeated calls reuse the cached handle.
//! let resource = viewer.extract("cover.webp").await?;
//! println!("{} -> {}", resource.kind().mime(), resource.handle().uri());
//!
//! viewer.dispose();
//! ```

pub mod bytes;
pub mod cache;
pub mod decoder;
pub mod error;
pub mod media;
pub mod viewer;

pub use cache::{CachedResource, ResourceCache, ResourceHandle};
pub use decoder::{ArchiveEntry, DecoderSession, StreamingDecoder};
pub use error::{Result, ViewerError};
pub use media::MediaKind;
pub use viewer::ArchiveViewer;

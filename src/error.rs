//! Error types for the extraction pipeline.
//!
//! Every semantic failure of the pipeline gets its own variant so callers
//! (and tests) can match on the exact cause. Failures raised by the external
//! decoder are wrapped in [`ViewerError::Decoder`] and propagated verbatim,
//! never reinterpreted.

/// Errors produced by the viewer, the media detector and the container
/// validator.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// An operation requiring a decoder session was attempted before
    /// `initialize` or after `dispose`.
    #[error("decoder session is not initialized")]
    NotInitialized,

    /// The path's extension is not in the recognized media set.
    #[error("unsupported media type: {extension:?}")]
    UnsupportedMediaType { extension: String },

    /// The decoder returned zero bytes for a requested path.
    #[error("extracted file data is empty: '{path}'")]
    EmptyExtraction { path: String },

    /// Image bytes are shorter than the minimum RIFF header size.
    #[error("file data too short for a RIFF container: {len} bytes")]
    MalformedContainer { len: usize },

    /// Image bytes contain no RIFF/WEBP signature in the scanned range.
    #[error("no RIFF header found in file data")]
    HeaderNotFound,

    /// The external decoder rejected or faulted.
    #[error("decoder failure: {0}")]
    Decoder(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

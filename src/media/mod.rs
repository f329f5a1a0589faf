//! Media classification and container validation.
//!
//! Two concerns live here:
//!
//! - [`kind`]: mapping an archive path's extension to a known media type
//! - [`container`]: locating and realigning the RIFF header inside extracted
//!   WebP bytes
//!
//! Both are pure byte/string functions with no I/O, which keeps the
//! extraction pipeline's only side effects at the decoder and cache
//! boundaries.

mod container;
mod kind;

pub use container::{RIFF_HEADER_LEN, align, find_riff_header};
pub use kind::MediaKind;

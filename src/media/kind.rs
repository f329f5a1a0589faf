use crate::error::{Result, ViewerError};

/// Media types the viewer knows how to prepare for display.
///
/// Derived purely from the file extension; anything outside the recognized
/// set is a classification failure, not a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
}

impl MediaKind {
    /// The canonical MIME string the resource handle is tagged with.
    pub fn mime(&self) -> &'static str {
        match self {
            MediaKind::Image => "image/webp",
            MediaKind::Audio => "audio/ogg",
        }
    }

    /// Classify a path by its extension (the substring after the last `.`),
    /// case-insensitively.
    pub fn from_path(path: &str) -> Result<Self> {
        let extension = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "webp" => Ok(MediaKind::Image),
            "ogg" => Ok(MediaKind::Audio),
            _ => Err(ViewerError::UnsupportedMediaType { extension }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_webp_and_ogg() {
        assert_eq!(MediaKind::from_path("dir/a.webp").unwrap(), MediaKind::Image);
        assert_eq!(MediaKind::from_path("b.ogg").unwrap(), MediaKind::Audio);
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(MediaKind::from_path("A.WEBP").unwrap(), MediaKind::Image);
        assert_eq!(MediaKind::from_path("b.Ogg").unwrap(), MediaKind::Audio);
    }

    #[test]
    fn unknown_extension_fails() {
        let err = MediaKind::from_path("notes.txt").unwrap_err();
        assert!(matches!(
            err,
            ViewerError::UnsupportedMediaType { extension } if extension == "txt"
        ));
    }

    #[test]
    fn missing_extension_fails() {
        let err = MediaKind::from_path("Makefile").unwrap_err();
        assert!(matches!(
            err,
            ViewerError::UnsupportedMediaType { extension } if extension.is_empty()
        ));
    }

    #[test]
    fn mime_strings_are_canonical() {
        assert_eq!(MediaKind::Image.mime(), "image/webp");
        assert_eq!(MediaKind::Audio.mime(), "audio/ogg");
    }
}

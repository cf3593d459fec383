//! Input validation before decoding.

use std::io::Read;
use std::path::Path;

use crate::config::LimitsConfig;
use crate::error::PipelineError;

/// Validates input files before they are handed to the decoder.
pub struct Validator {
    limits: LimitsConfig,
}

impl Validator {
    /// Create a new validator with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Quick checks before a full decode.
    ///
    /// The path must be an existing regular file within the size limit whose
    /// header matches a format the decoder supports. Returns the sniffed
    /// format name.
    pub fn validate(&self, path: &Path) -> Result<&'static str, PipelineError> {
        if !path.is_file() {
            return Err(PipelineError::FileNotFound(path.to_path_buf()));
        }

        let metadata = std::fs::metadata(path).map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot read metadata: {}", e),
        })?;

        let max_bytes = self.limits.max_file_size_mb * 1024 * 1024;
        if metadata.len() > max_bytes {
            return Err(PipelineError::FileTooLarge {
                path: path.to_path_buf(),
                size_mb: metadata.len() / (1024 * 1024),
                max_mb: self.limits.max_file_size_mb,
            });
        }

        let header = Self::read_header(path)?;
        sniff_format(&header).ok_or_else(|| PipelineError::Decode {
            path: path.to_path_buf(),
            message: "Unrecognized image format (invalid magic bytes)".to_string(),
        })
    }

    fn read_header(path: &Path) -> Result<Vec<u8>, PipelineError> {
        let file = std::fs::File::open(path).map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot open file: {}", e),
        })?;

        let mut header = Vec::with_capacity(12);
        file.take(12)
            .read_to_end(&mut header)
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot read file header: {}", e),
            })?;

        if header.len() < 4 {
            return Err(PipelineError::Decode {
                path: path.to_path_buf(),
                message: "File too small to be a valid image".to_string(),
            });
        }
        Ok(header)
    }
}

/// Name the image format whose signature starts `header`, if it is one the
/// decoder is built with.
pub fn sniff_format(header: &[u8]) -> Option<&'static str> {
    match header {
        [0xFF, 0xD8, 0xFF, ..] => Some("jpeg"),
        [0x89, b'P', b'N', b'G', ..] => Some("png"),
        [b'B', b'M', ..] => Some("bmp"),
        [b'G', b'I', b'F', b'8', ..] => Some("gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("webp"),
        [b'I', b'I', 0x2A, 0x00, ..] | [b'M', b'M', 0x00, 0x2A, ..] => Some("tiff"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_common_formats() {
        assert_eq!(sniff_format(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("jpeg"));
        assert_eq!(
            sniff_format(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
            Some("png")
        );
        assert_eq!(sniff_format(b"BM\x36\x00"), Some("bmp"));
        assert_eq!(sniff_format(b"RIFF\0\0\0\0WEBP"), Some("webp"));
    }

    #[test]
    fn test_sniff_rejects_unknown_and_partial() {
        assert_eq!(sniff_format(&[0, 0, 0, 0]), None);
        // RIFF container that is not WebP
        assert_eq!(sniff_format(b"RIFF\0\0\0\0WAVE"), None);
        // Bare byte-order mark without the TIFF version
        assert_eq!(sniff_format(&[b'I', b'I', 0x00, 0x00]), None);
    }

    #[test]
    fn test_validate_missing_file() {
        let validator = Validator::new(LimitsConfig::default());
        let err = validator
            .validate(Path::new("/nonexistent/chansplit.png"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::FileNotFound(_)));
    }

    #[test]
    fn test_validate_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let validator = Validator::new(LimitsConfig::default());
        let err = validator.validate(dir.path()).unwrap_err();
        assert!(matches!(err, PipelineError::FileNotFound(_)));
    }

    #[test]
    fn test_validate_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"plain text, not pixels").unwrap();

        let validator = Validator::new(LimitsConfig::default());
        let err = validator.validate(&path).unwrap_err();
        assert!(err.to_string().contains("magic bytes"));
    }

    #[test]
    fn test_validate_rejects_tiny_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.bmp");
        std::fs::write(&path, b"BM").unwrap();

        let validator = Validator::new(LimitsConfig::default());
        let err = validator.validate(&path).unwrap_err();
        assert!(err.to_string().contains("too small"));
    }

    #[test]
    fn test_validate_accepts_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ok.png");
        image::RgbImage::new(2, 2).save(&path).unwrap();

        let validator = Validator::new(LimitsConfig::default());
        assert_eq!(validator.validate(&path).unwrap(), "png");
    }
}

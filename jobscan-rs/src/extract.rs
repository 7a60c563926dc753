//! Attachment text extraction
//!
//! Extraction is optional: when no backend can read an attachment the
//! assessment proceeds with the posting text alone.

use std::path::Path;
use tracing::{debug, warn};

/// Result of reading an attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Readable text was found
    Text(String),
    /// The attachment was read but held no text
    Empty,
    /// No backend could read the attachment
    Unavailable(String),
}

impl Extraction {
    /// Extracted text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Extraction::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Note recorded on the assessment when extraction added nothing
    pub fn note(&self) -> Option<String> {
        match self {
            Extraction::Text(_) => None,
            Extraction::Empty => Some("No text could be extracted from the attachment".to_string()),
            Extraction::Unavailable(reason) => {
                Some(format!("Attachment text extraction unavailable: {}", reason))
            }
        }
    }
}

/// Pulls additional posting text out of an attachment
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Extraction;
}

/// Extensions treated as images, which need an OCR backend
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Reads UTF-8 text attachments; images are reported unavailable
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Extraction {
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        if is_image {
            debug!("No OCR backend for {}", path.display());
            return Extraction::Unavailable("no OCR backend for images".to_string());
        }

        match std::fs::read_to_string(path) {
            Ok(text) if text.trim().is_empty() => Extraction::Empty,
            Ok(text) => Extraction::Text(text.trim().to_string()),
            Err(e) => {
                warn!("Failed to read attachment {}: {}", path.display(), e);
                Extraction::Unavailable(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  Pay a registration fee  ").unwrap();

        let extraction = PlainTextExtractor.extract(file.path());
        assert_eq!(extraction.text(), Some("Pay a registration fee"));
        assert_eq!(extraction.note(), None);
    }

    #[test]
    fn test_images_are_unavailable() {
        let extraction = PlainTextExtractor.extract(Path::new("offer-letter.PNG"));
        assert!(matches!(extraction, Extraction::Unavailable(_)));
        assert!(extraction.note().is_some());
    }

    #[test]
    fn test_missing_and_blank_files() {
        let missing = PlainTextExtractor.extract(Path::new("/nonexistent/posting.txt"));
        assert!(matches!(missing, Extraction::Unavailable(_)));

        let blank = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(PlainTextExtractor.extract(blank.path()), Extraction::Empty);
    }
}

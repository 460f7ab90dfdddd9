/// Output of the image-to-text collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    pub text: String,
    pub confidence: f64,
}

/// Recognition failure; surfaced as "extraction failed", never as missing fields.
#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("uploaded document is empty")]
    EmptyDocument,
    #[error("document is not valid UTF-8 text: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("recognition engine unavailable: {0}")]
    Unavailable(String),
}

/// Seam for the OCR engine. Built once at start-up and shared by reference.
/// Implementations may block; the HTTP handler calls them from the blocking
/// thread pool.
pub trait TextRecognizer: Send + Sync {
    fn recognize(&self, document: &[u8]) -> Result<Recognition, RecognitionError>;
}

const SHORT_TEXT_THRESHOLD: usize = 10;
const CONFIDENT: f64 = 0.9;
const UNSURE: f64 = 0.5;

/// Accepts documents that were already transcribed upstream (scanner
/// sidecar text, pasted form contents) and scores them by length.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRecognizer;

impl TextRecognizer for PlainTextRecognizer {
    fn recognize(&self, document: &[u8]) -> Result<Recognition, RecognitionError> {
        if document.is_empty() {
            return Err(RecognitionError::EmptyDocument);
        }

        let text = std::str::from_utf8(document)?.to_string();
        let confidence = if text.trim().chars().count() > SHORT_TEXT_THRESHOLD {
            CONFIDENT
        } else {
            UNSURE
        };

        Ok(Recognition { text, confidence })
    }
}

//! Document format identification and the text-extraction seam.
//!
//! Format decoders (PDF, DOCX, HTML, CSV) are external collaborators:
//! this module only defines the contract they fulfill and ships a
//! plain-text implementation. Unsupported MIME types are a reportable
//! failure, never a silent empty result.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SemaError};

/// Supported document formats, keyed by declared MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    PlainText,
    Docx,
    Html,
    Csv,
}

impl DocumentFormat {
    /// Map a declared MIME type to a format.
    ///
    /// Returns `SemaError::UnsupportedFormat` for anything outside
    /// the supported set.
    pub fn from_mime(mime: &str) -> Result<Self> {
        match mime {
            "application/pdf" => Ok(Self::Pdf),
            "text/plain" => Ok(Self::PlainText),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Ok(Self::Docx)
            }
            "text/html" => Ok(Self::Html),
            "text/csv" | "application/csv" => Ok(Self::Csv),
            other => Err(SemaError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Short lowercase name used in stats and provenance display
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::PlainText => "text",
            Self::Docx => "docx",
            Self::Html => "html",
            Self::Csv => "csv",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extraction output: plain text plus the format-dependent unit count
/// (pages, paragraphs, rows)
#[derive(Debug, Clone)]
pub struct Extracted {
    pub text: String,
    pub units: Option<usize>,
}

/// Pluggable text-extraction capability.
///
/// Implementations decode an uploaded byte stream into plain text.
/// They should return `SemaError::ExtractionFailed` on malformed
/// input rather than producing partial garbage.
pub trait TextExtractor: Send + Sync {
    /// Which formats this extractor can decode
    fn supports(&self, format: DocumentFormat) -> bool;

    /// Decode raw bytes into text and format metadata
    fn extract(&self, data: &[u8], format: DocumentFormat) -> Result<Extracted>;
}

/// Extractor for plain-text payloads (text/plain and text/csv)
#[derive(Debug, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn supports(&self, format: DocumentFormat) -> bool {
        matches!(format, DocumentFormat::PlainText | DocumentFormat::Csv)
    }

    fn extract(&self, data: &[u8], format: DocumentFormat) -> Result<Extracted> {
        if !self.supports(format) {
            return Err(SemaError::UnsupportedFormat(format.to_string()));
        }

        let text = std::str::from_utf8(data)
            .map_err(|e| SemaError::ExtractionFailed(format!("invalid UTF-8 payload: {e}")))?
            .to_string();

        // Rows for CSV, no unit for free text
        let units = match format {
            DocumentFormat::Csv => Some(text.lines().count()),
            _ => None,
        };

        Ok(Extracted { text, units })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_mime_types() {
        assert_eq!(
            DocumentFormat::from_mime("application/pdf").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_mime("text/plain").unwrap(),
            DocumentFormat::PlainText
        );
        assert_eq!(
            DocumentFormat::from_mime("text/csv").unwrap(),
            DocumentFormat::Csv
        );
        assert_eq!(
            DocumentFormat::from_mime("application/csv").unwrap(),
            DocumentFormat::Csv
        );
    }

    #[test]
    fn test_unsupported_mime_is_error() {
        let err = DocumentFormat::from_mime("application/zip").unwrap_err();
        assert!(err.is_bad_request());
        assert!(err.message().contains("application/zip"));
    }

    #[test]
    fn test_plain_text_extraction() {
        let extractor = PlainTextExtractor;
        let out = extractor
            .extract(b"Hello world.", DocumentFormat::PlainText)
            .unwrap();
        assert_eq!(out.text, "Hello world.");
        assert!(out.units.is_none());
    }

    #[test]
    fn test_csv_extraction_counts_rows() {
        let extractor = PlainTextExtractor;
        let out = extractor
            .extract(b"a,b\n1,2\n3,4", DocumentFormat::Csv)
            .unwrap();
        assert_eq!(out.units, Some(3));
    }

    #[test]
    fn test_invalid_utf8_is_extraction_failure() {
        let extractor = PlainTextExtractor;
        let err = extractor
            .extract(&[0xff, 0xfe, 0x00], DocumentFormat::PlainText)
            .unwrap_err();
        assert!(matches!(err, SemaError::ExtractionFailed(_)));
    }

    #[test]
    fn test_extractor_rejects_unsupported_format() {
        let extractor = PlainTextExtractor;
        assert!(!extractor.supports(DocumentFormat::Pdf));
        assert!(extractor
            .extract(b"%PDF-1.4", DocumentFormat::Pdf)
            .is_err());
    }
}

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::docx;
use crate::errors::{catch_decoder_panic, DocumentError};

// @module: Input decoding into plain-text lines

// @const: Every line boundary a text file may carry
static LINE_BOUNDARY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]").unwrap()
});

const UTF8_BOM: char = '\u{feff}';

// @enum: Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Text,
    Pdf,
    Docx,
}

impl InputFormat {
    /// Detect the format from the file extension (case-insensitive)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "txt" => Ok(Self::Text),
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "" => Err(DocumentError::UnsupportedFormat(format!(
                "{} has no file extension",
                path.display()
            ))),
            other => Err(DocumentError::UnsupportedFormat(format!(".{}", other))),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

// @decodes: Raw file bytes into text according to the format
pub fn decode_bytes(format: InputFormat, bytes: &[u8]) -> Result<String, DocumentError> {
    match format {
        InputFormat::Text => {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| DocumentError::Decode(e.to_string()))?;
            Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
        }
        InputFormat::Pdf => catch_decoder_panic(|| pdf_extract::extract_text_from_mem(bytes))
            .map_err(|message| DocumentError::Pdf(format!("decoder panicked: {}", message)))?
            .map_err(|e| DocumentError::Pdf(e.to_string())),
        InputFormat::Docx => docx::extract_text(bytes),
    }
}

// @checks: Whitespace plus the FS/GS/RS/US separators, which `char::is_whitespace` rejects
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

// @splits: Text into trimmed, non-empty lines
pub fn split_lines(text: &str) -> Vec<String> {
    LINE_BOUNDARY_REGEX
        .split(text.trim_matches(is_trimmable))
        .map(|line| line.trim_matches(is_trimmable))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// @struct: Decoded input document
#[derive(Debug, Clone)]
pub struct SourceDocument {
    // @field: Path the document was read from
    pub path: PathBuf,

    // @field: Detected input format
    pub format: InputFormat,

    // @field: Full decoded text
    pub text: String,
}

impl SourceDocument {
    /// Read and decode a document from disk.
    ///
    /// Fails when the format is unsupported, the bytes cannot be decoded, or
    /// the decoded text is blank.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let format = InputFormat::from_path(path)?;
        let bytes = fs::read(path)?;
        debug!("Read {} bytes from {:?} as {}", bytes.len(), path, format);

        Self::from_bytes(path, format, &bytes)
    }

    // @creates: Document from bytes already in memory
    pub fn from_bytes<P: AsRef<Path>>(
        path: P,
        format: InputFormat,
        bytes: &[u8],
    ) -> Result<Self, DocumentError> {
        let text = decode_bytes(format, bytes)?;
        if text.trim_matches(is_trimmable).is_empty() {
            warn!("No usable text found in {:?}", path.as_ref());
            return Err(DocumentError::EmptyContent);
        }

        Ok(Self {
            path: path.as_ref().to_path_buf(),
            format,
            text,
        })
    }

    pub fn lines(&self) -> Vec<String> {
        split_lines(&self.text)
    }
}

/*!
 * Error types for the zhvi application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when calling a remote translation endpoint
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors that can occur while loading the dictionary resource
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be read
    #[error("Failed to read dictionary {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary file is not a JSON object of strings
    #[error("Failed to parse dictionary {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that abort the processing of an input document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// File extension is not one of txt, pdf, docx
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// Word document is an encrypted compound file
    #[error("Cannot unlock the protected Word document: {0}")]
    Encrypted(String),

    /// Word package could not be opened or parsed
    #[error("Invalid Word document: {0}")]
    InvalidDocx(String),

    /// PDF text extraction failed
    #[error("Failed to extract PDF text: {0}")]
    Pdf(String),

    /// Text file is not valid UTF-8
    #[error("Failed to decode text file: {0}")]
    Decode(String),

    /// Decoding succeeded but produced nothing to translate
    #[error("The file does not contain any usable content")]
    EmptyContent,

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from document decoding
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}

/// Run a third-party decoder, turning a panic into an error message
pub(crate) fn catch_decoder_panic<T, F>(decode: F) -> Result<T, String>
where
    F: FnOnce() -> T,
{
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(decode)).map_err(|payload| {
        payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "decoder panicked".to_string())
    })
}

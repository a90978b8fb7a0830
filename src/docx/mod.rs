/*!
 * Minimal WordprocessingML support.
 *
 * - `reader`: plain-text extraction from `.docx` packages
 * - `writer`: generation of a simple paragraph-only `.docx`
 */

pub mod reader;
pub mod writer;

pub use reader::{extract_paragraphs, extract_text, is_encrypted_package, unlock_package};
pub use writer::{document_xml, write_docx};

/// Main WordprocessingML namespace
pub const WORDML_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

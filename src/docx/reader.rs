use std::borrow::Cow;
use std::io::{Cursor, Read};

use log::{debug, info};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::errors::{catch_decoder_panic, DocumentError};

// Compound File Binary header; encrypted OOXML packages are wrapped in one
const OLE_SIGNATURE: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

const DOCUMENT_PART: &str = "word/document.xml";

// Blank open password, then Word's well-known read-only default
const DEFAULT_PASSWORDS: [&str; 2] = ["", "VelvetSweatshop"];

/// True when the bytes are an OLE compound file rather than a zip package
pub fn is_encrypted_package(bytes: &[u8]) -> bool {
    bytes.starts_with(&OLE_SIGNATURE)
}

fn is_line_break(e: &BytesStart<'_>) -> bool {
    // Page and column breaks carry no text
    !e.attributes().flatten().any(|attr| {
        attr.key.as_ref() == b"w:type" && attr.value.as_ref() != b"textWrapping"
    })
}

fn unlock_with<F>(bytes: &[u8], decrypt: F) -> Result<Cow<'_, [u8]>, DocumentError>
where
    F: Fn(&[u8], &str) -> Result<Vec<u8>, String>,
{
    if !is_encrypted_package(bytes) {
        return Ok(Cow::Borrowed(bytes));
    }

    let mut last_error = String::new();
    for password in DEFAULT_PASSWORDS {
        match decrypt(bytes, password) {
            Ok(package) => {
                info!("Opened encrypted document with a default password");
                return Ok(Cow::Owned(package));
            }
            Err(e) => {
                debug!("Default password rejected: {}", e);
                last_error = e;
            }
        }
    }

    Err(DocumentError::Encrypted(format!(
        "the document is password protected ({})",
        last_error
    )))
}

/// Zip package bytes, decrypting an OLE-wrapped package with the default passwords.
///
/// Plain packages are returned as-is. A package that needs a real password
/// is reported as `DocumentError::Encrypted`.
pub fn unlock_package(bytes: &[u8]) -> Result<Cow<'_, [u8]>, DocumentError> {
    unlock_with(bytes, |raw, password| {
        catch_decoder_panic(|| office_crypto::decrypt_from_bytes(raw.to_vec(), password))
            .and_then(|result| result.map_err(|e| format!("{:?}", e)))
    })
}

/// Text of every top-level body paragraph, in document order.
///
/// Paragraphs inside tables are skipped; empty paragraphs are kept as empty
/// strings so paragraph positions match the source document. Paragraphs
/// nested inside a body paragraph (text boxes, drawing fallbacks) are skipped.
pub fn extract_paragraphs(bytes: &[u8]) -> Result<Vec<String>, DocumentError> {
    let package = unlock_package(bytes)?;
    paragraphs_from_package(&package)
}

fn paragraphs_from_package(bytes: &[u8]) -> Result<Vec<String>, DocumentError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| DocumentError::InvalidDocx(format!("not a zip package: {}", e)))?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| DocumentError::InvalidDocx(format!("missing {}: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| DocumentError::InvalidDocx(format!("failed to read {}: {}", DOCUMENT_PART, e)))?;

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut tbl_depth = 0usize;
    let mut p_depth = 0usize;
    let mut r_depth = 0usize;
    let mut capturing = false;
    let mut in_text = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| DocumentError::InvalidDocx(format!("failed to parse {}: {}", DOCUMENT_PART, e)))?;

        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => tbl_depth += 1,
                b"w:p" => {
                    if p_depth == 0 && tbl_depth == 0 {
                        capturing = true;
                        current.clear();
                    }
                    p_depth += 1;
                }
                b"w:r" => r_depth += 1,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if p_depth == 0 && tbl_depth == 0 => paragraphs.push(String::new()),
                b"w:tab" if capturing && p_depth == 1 && r_depth > 0 => current.push('\t'),
                b"w:cr" if capturing && p_depth == 1 && r_depth > 0 => current.push('\n'),
                b"w:br" if capturing && p_depth == 1 && r_depth > 0 && is_line_break(&e) => current.push('\n'),
                b"w:noBreakHyphen" if capturing && p_depth == 1 && r_depth > 0 => current.push('-'),
                _ => {}
            },
            Event::Text(t) => {
                if capturing && p_depth == 1 && in_text {
                    let text = t
                        .unescape()
                        .map_err(|e| DocumentError::InvalidDocx(format!("bad text node: {}", e)))?;
                    current.push_str(&text);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" => tbl_depth = tbl_depth.saturating_sub(1),
                b"w:p" => {
                    p_depth = p_depth.saturating_sub(1);
                    if p_depth == 0 && capturing {
                        paragraphs.push(std::mem::take(&mut current));
                        capturing = false;
                    }
                }
                b"w:r" => r_depth = r_depth.saturating_sub(1),
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// Paragraph texts joined with newlines
pub fn extract_text(bytes: &[u8]) -> Result<String, DocumentError> {
    Ok(extract_paragraphs(bytes)?.join("\n"))
}

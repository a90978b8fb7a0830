/*!
 * Common test utilities for the zhvi test suite
 */

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// Dictionary used across the suite
pub const SAMPLE_DICTIONARY_JSON: &str = r#"{
    "你好": "xin chào",
    "你": "mày",
    "我们": "chúng tôi",
    "学习": "học tập",
    "中文": "tiếng Trung",
    "图书馆": "thư viện"
}"#;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Writes the sample dictionary into the directory
pub fn create_test_dictionary(dir: &Path) -> Result<PathBuf> {
    create_test_file(dir, "dictionary_full.json", SAMPLE_DICTIONARY_JSON)
}

/// Builds a minimal .docx package whose body holds the given paragraphs
pub fn docx_bytes(paragraphs: &[&str]) -> Result<Vec<u8>> {
    let mut body = String::new();
    for paragraph in paragraphs {
        if paragraph.is_empty() {
            body.push_str("<w:p/>");
        } else {
            body.push_str(&format!("<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>", paragraph));
        }
    }
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("word/document.xml", SimpleFileOptions::default())?;
    zip.write_all(xml.as_bytes())?;
    Ok(zip.finish()?.into_inner())
}

/// Writes a minimal .docx package into the directory
pub fn create_test_docx(dir: &Path, filename: &str, paragraphs: &[&str]) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, docx_bytes(paragraphs)?)?;
    Ok(file_path)
}

/// Routes library logs to the test harness output; safe to call repeatedly
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/*!
 * Tests for input decoding and line splitting
 */

use zhvi::document_processor::{InputFormat, SourceDocument, split_lines};
use zhvi::errors::DocumentError;

use crate::common;

/// Test reading a text file into lines
#[test]
fn test_read_withTextFile_shouldSplitAndTrim() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(dir.path(), "input.txt", "\u{feff}  你好吗  \r\n\r\n我们学习中文\n").unwrap();

    let document = SourceDocument::read(&path).unwrap();

    assert_eq!(document.format, InputFormat::Text);
    assert_eq!(document.lines(), vec!["你好吗", "我们学习中文"]);
}

/// Test reading a Word document into lines
#[test]
fn test_read_withDocxFile_shouldReturnParagraphs() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_docx(dir.path(), "input.docx", &["第一段", "", "第二段"]).unwrap();

    let document = SourceDocument::read(&path).unwrap();

    assert_eq!(document.format, InputFormat::Docx);
    assert_eq!(document.lines(), vec!["第一段", "第二段"]);
}

/// Test that a password-protected Word file is reported as such
#[test]
fn test_read_withOleContainer_shouldReportEncrypted() {
    let dir = common::create_temp_dir().unwrap();
    let path = dir.path().join("locked.docx");
    let mut bytes = vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
    bytes.resize(512, 0);
    std::fs::write(&path, bytes).unwrap();

    assert!(matches!(SourceDocument::read(&path), Err(DocumentError::Encrypted(_))));
}

/// Test that unknown extensions are rejected before reading
#[test]
fn test_read_withUnsupportedExtension_shouldFail() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(dir.path(), "input.rtf", "你好").unwrap();

    assert!(matches!(SourceDocument::read(&path), Err(DocumentError::UnsupportedFormat(_))));
}

/// Test that a Word file with only empty paragraphs has no content
#[test]
fn test_read_withEmptyDocx_shouldReportEmptyContent() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_docx(dir.path(), "empty.docx", &["", ""]).unwrap();

    assert!(matches!(SourceDocument::read(&path), Err(DocumentError::EmptyContent)));
}

/// Test the less common line boundaries
#[test]
fn test_splitLines_withUnicodeSeparators_shouldSplit() {
    assert_eq!(
        split_lines("一\u{2029}二\u{1c}三\u{0b}四"),
        vec!["一", "二", "三", "四"]
    );
}

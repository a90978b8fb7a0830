/*!
 * Tests for the segment → assemble → render pipeline
 */

use zhvi::app_config::OutputConfig;
use zhvi::dictionary::Dictionary;
use zhvi::docx::{extract_paragraphs, write_docx};
use zhvi::providers::mock::MockTranslator;
use zhvi::translation::{BlockRenderer, DocumentAssembler, Segmenter, SentenceStrategy};

fn dictionary() -> Dictionary {
    Dictionary::from_json_str(crate::common::SAMPLE_DICTIONARY_JSON).unwrap()
}

/// Test that blank lines produce no blocks
#[tokio::test]
async fn test_assemble_withBlankLines_shouldProduceOneBlock() {
    let dictionary = dictionary();
    let assembler = DocumentAssembler::new(Segmenter::new(&dictionary), SentenceStrategy::Dictionary);

    let document = assembler.assemble(&["", "你好", "  "]).await;

    assert_eq!(document.len(), 1);
}

/// Test remote-failure resilience end to end through rendering
#[tokio::test]
async fn test_assembleAndRender_withFailingRemote_shouldRenderFailureForEveryLine() {
    let dictionary = dictionary();
    let translator = MockTranslator::failing();
    let assembler = DocumentAssembler::new(Segmenter::new(&dictionary), SentenceStrategy::Remote(&translator));
    let labels = OutputConfig::default();

    let document = assembler.assemble(&["你好", "我们", "", "图书馆"]).await;
    let paragraphs = BlockRenderer::new(&labels).render_document(&document);

    assert_eq!(document.len(), 3);
    assert_eq!(paragraphs.len(), 9);
    assert_eq!(paragraphs[2], "→ Google dịch: [Google dịch thất bại]");
    assert_eq!(paragraphs[5], "→ Google dịch: [Google dịch thất bại]");
    assert_eq!(paragraphs[8], "→ Google dịch: [Google dịch thất bại]");
}

/// Test custom labels flow through rendering
#[tokio::test]
async fn test_render_withCustomLabels_shouldUseThem() {
    let dictionary = dictionary();
    let assembler = DocumentAssembler::new(Segmenter::new(&dictionary), SentenceStrategy::Dictionary);
    let labels = OutputConfig {
        unknown_marker: "?".to_string(),
        gloss_separator: " = ".to_string(),
        dictionary_prefix: "=> ".to_string(),
        ..OutputConfig::default()
    };

    let document = assembler.assemble(&["你好吗"]).await;
    let paragraphs = BlockRenderer::new(&labels).render_document(&document);

    assert_eq!(paragraphs, vec!["你好吗", "你好 = xin chào\n吗 = ?", "=> xin chào 吗"]);
}

/// Test that rendered paragraphs survive the docx round trip
#[tokio::test]
async fn test_renderedDocument_throughDocx_shouldReadBackUnchanged() {
    let dictionary = dictionary();
    let assembler = DocumentAssembler::new(Segmenter::new(&dictionary), SentenceStrategy::Dictionary);
    let labels = OutputConfig::default();

    let document = assembler.assemble(&["我们在图书馆学习中文", "A & B <你好>"]).await;
    let paragraphs = BlockRenderer::new(&labels).render_document(&document);
    let bytes = write_docx(&paragraphs, std::io::Cursor::new(Vec::new())).unwrap().into_inner();

    assert_eq!(extract_paragraphs(&bytes).unwrap(), paragraphs);
}

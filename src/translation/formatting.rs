/*!
 * Paragraph rendering for the bilingual document.
 *
 * This module turns line blocks into the paragraph texts written to Word and
 * strips the control characters that WordprocessingML cannot carry.
 */

use regex::Regex;
use once_cell::sync::Lazy;

use crate::app_config::OutputConfig;
use crate::translation::output::{LineBlock, OutputDocument, SentenceTranslation};
use crate::translation::segmenter::GlossTrace;

/// C0 controls that are illegal in XML 1.0 (tab, LF and CR are kept)
static ILLEGAL_CONTROL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F]").unwrap()
});

/// Remove characters that cannot appear in a Word document
pub fn sanitize_for_docx(text: &str) -> String {
    ILLEGAL_CONTROL_REGEX.replace_all(text, "").into_owned()
}

/// Renders line blocks with the labels of the output configuration
pub struct BlockRenderer<'a> {
    labels: &'a OutputConfig,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(labels: &'a OutputConfig) -> Self {
        Self { labels }
    }

    /// One `segment: meaning` line per gloss entry
    pub fn render_gloss(&self, trace: &GlossTrace) -> String {
        trace
            .iter()
            .map(|entry| {
                let meaning = entry
                    .meaning
                    .as_deref()
                    .unwrap_or(&self.labels.unknown_marker);
                format!("{}{}{}", entry.segment, self.labels.gloss_separator, meaning)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Sentence paragraph with its mode prefix
    pub fn render_translation(&self, translation: &SentenceTranslation) -> String {
        match translation {
            SentenceTranslation::Dictionary(text) => {
                format!("{}{}", self.labels.dictionary_prefix, text)
            }
            SentenceTranslation::Remote(text) => format!("{}{}", self.labels.remote_prefix, text),
            SentenceTranslation::RemoteFailed { .. } => {
                format!("{}{}", self.labels.remote_prefix, self.labels.remote_failure_text)
            }
        }
    }

    /// Original line, gloss trace and translation, sanitized
    pub fn render_block(&self, block: &LineBlock) -> [String; 3] {
        [
            sanitize_for_docx(&block.original),
            sanitize_for_docx(&self.render_gloss(&block.trace)),
            sanitize_for_docx(&self.render_translation(&block.translation)),
        ]
    }

    /// All paragraphs of a document, in order
    pub fn render_document(&self, document: &OutputDocument) -> Vec<String> {
        document
            .blocks()
            .iter()
            .flat_map(|block| self.render_block(block))
            .collect()
    }
}

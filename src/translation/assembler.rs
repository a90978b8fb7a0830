/*!
 * Bilingual document assembly.
 *
 * The assembler walks the input lines in order, segments each non-blank line
 * and attaches the sentence translation of the selected strategy. It does no
 * translation work of its own.
 */

use log::{debug, warn};

use crate::providers::RemoteTranslator;
use crate::translation::output::{LineBlock, OutputDocument, SentenceTranslation};
use crate::translation::segmenter::Segmenter;

/// How sentence translations are produced for a whole document
#[derive(Debug, Clone, Copy)]
pub enum SentenceStrategy<'a> {
    /// Use the sentence built from dictionary glosses
    Dictionary,

    /// Ask a remote translator, one line at a time
    Remote(&'a dyn RemoteTranslator),
}

/// Translate one line remotely, turning any failure into a typed value
pub async fn translate_remote(translator: &dyn RemoteTranslator, line: &str) -> SentenceTranslation {
    match translator.translate(line).await {
        Ok(text) => SentenceTranslation::Remote(text),
        Err(e) => {
            warn!("{} translation failed for {:?}: {}", translator.name(), line, e);
            SentenceTranslation::RemoteFailed { reason: e.to_string() }
        }
    }
}

/// Builds an `OutputDocument` from plain-text lines
pub struct DocumentAssembler<'a> {
    segmenter: Segmenter<'a>,
    strategy: SentenceStrategy<'a>,
}

impl<'a> DocumentAssembler<'a> {
    pub fn new(segmenter: Segmenter<'a>, strategy: SentenceStrategy<'a>) -> Self {
        Self { segmenter, strategy }
    }

    /// Assemble the document; blank lines produce no block
    pub async fn assemble<S: AsRef<str>>(&self, lines: &[S]) -> OutputDocument {
        self.assemble_with_progress(lines, |_, _| {}).await
    }

    /// Assemble the document, calling `on_line(done, total)` after each block
    pub async fn assemble_with_progress<S, F>(&self, lines: &[S], mut on_line: F) -> OutputDocument
    where
        S: AsRef<str>,
        F: FnMut(usize, usize),
    {
        let total = lines.iter().filter(|l| !l.as_ref().trim().is_empty()).count();
        let mut document = OutputDocument::new();

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            let segmentation = self.segmenter.segment_and_translate(line);
            let translation = match self.strategy {
                SentenceStrategy::Dictionary => SentenceTranslation::Dictionary(segmentation.sentence),
                SentenceStrategy::Remote(translator) => translate_remote(translator, line).await,
            };

            debug!(
                "Line {}/{}: {} segments, {} unknown",
                document.len() + 1,
                total,
                segmentation.trace.len(),
                segmentation.trace.unknown_count()
            );

            document.push(LineBlock {
                original: line.to_string(),
                trace: segmentation.trace,
                translation,
            });
            on_line(document.len(), total);
        }

        document
    }
}

/*!
 * Bilingual output document model.
 *
 * One `LineBlock` per translated input line, in input order. The model holds
 * typed values only; turning them into paragraph text is the job of
 * `formatting`.
 */

use crate::translation::segmenter::GlossTrace;

/// Full-sentence translation of one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceTranslation {
    /// Sentence built from dictionary glosses
    Dictionary(String),

    /// Sentence returned by the remote translator
    Remote(String),

    /// The remote translator could not produce a sentence
    RemoteFailed {
        /// Why the call failed
        reason: String,
    },
}

impl SentenceTranslation {
    /// The translated text, if there is one
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Dictionary(text) | Self::Remote(text) => Some(text),
            Self::RemoteFailed { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::RemoteFailed { .. })
    }
}

/// Everything rendered for one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBlock {
    /// The trimmed source line
    pub original: String,

    /// Per-segment glosses of the line
    pub trace: GlossTrace,

    /// Sentence translation for the chosen mode
    pub translation: SentenceTranslation,
}

/// Ordered list of line blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDocument {
    blocks: Vec<LineBlock>,
}

impl OutputDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: LineBlock) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[LineBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of lines whose remote translation failed
    pub fn failed_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.translation.is_failure()).count()
    }
}

/*!
 * Chinese → Vietnamese glossing and sentence translation.
 *
 * This module contains the core of the application. It is split into several
 * submodules:
 *
 * - `segmenter`: Greedy longest-match segmentation against the dictionary
 * - `output`: The bilingual document model
 * - `assembler`: Per-line orchestration of segmentation and sentence translation
 * - `formatting`: Paragraph rendering and sanitizing for Word
 */

// Re-export main types for easier usage
pub use self::assembler::{DocumentAssembler, SentenceStrategy, translate_remote};
pub use self::formatting::{BlockRenderer, sanitize_for_docx};
pub use self::output::{LineBlock, OutputDocument, SentenceTranslation};
pub use self::segmenter::{GlossEntry, GlossTrace, Segmentation, Segmenter, segment_and_translate};

// Submodules
pub mod assembler;
pub mod formatting;
pub mod output;
pub mod segmenter;

/*!
 * Greedy longest-match segmentation against the dictionary.
 *
 * A line is walked left to right. At every position the longest dictionary key
 * that starts there wins; when nothing matches, the single character is kept
 * as an unknown segment. The resulting trace always covers the whole line.
 */

use log::warn;

use crate::dictionary::Dictionary;

/// One segment of a line and its dictionary meaning, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossEntry {
    /// The source text covered by this entry
    pub segment: String,

    /// Dictionary translation; `None` when the segment is unknown
    pub meaning: Option<String>,
}

impl GlossEntry {
    pub fn known(segment: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            meaning: Some(meaning.into()),
        }
    }

    pub fn unknown(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            meaning: None,
        }
    }

    pub fn is_known(&self) -> bool {
        self.meaning.is_some()
    }
}

/// Ordered, gap-free list of gloss entries for one line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlossTrace {
    entries: Vec<GlossEntry>,
}

impl GlossTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: GlossEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[GlossEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GlossEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concatenation of all segments; equals the segmented line
    pub fn source_text(&self) -> String {
        self.entries.iter().map(|e| e.segment.as_str()).collect()
    }

    /// Number of entries without a dictionary meaning
    pub fn unknown_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_known()).count()
    }
}

impl<'a> IntoIterator for &'a GlossTrace {
    type Item = &'a GlossEntry;
    type IntoIter = std::slice::Iter<'a, GlossEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Result of segmenting one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    /// Per-segment glosses
    pub trace: GlossTrace,

    /// Whole-line translation built from the glosses; unknown characters pass through
    pub sentence: String,
}

/// Longest-match segmenter borrowing a loaded dictionary
#[derive(Debug, Clone)]
pub struct Segmenter<'a> {
    dictionary: &'a Dictionary,
    window: usize,
    separator: String,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter whose lookahead window fits the longest dictionary key
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            window: dictionary.max_key_len().max(1),
            separator: " ".to_string(),
        }
    }

    /// Pin the lookahead window. Keys longer than the window can never match.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        let unreachable = self.dictionary.count_longer_than(self.window);
        if unreachable > 0 {
            warn!(
                "{} dictionary entries are longer than the {}-character window and will never match",
                unreachable, self.window
            );
        }
        self
    }

    /// Separator placed between the parts of the dictionary sentence
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn dictionary(&self) -> &Dictionary {
        self.dictionary
    }

    /// Segment a line and build its dictionary sentence. Never fails.
    pub fn segment_and_translate(&self, line: &str) -> Segmentation {
        // Byte offset of every char boundary, including the end of the line
        let bounds: Vec<usize> = line
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(line.len()))
            .collect();
        let char_count = bounds.len() - 1;

        let mut trace = GlossTrace::new();
        let mut parts: Vec<&str> = Vec::new();
        let mut cursor = 0;

        while cursor < char_count {
            let longest = self.window.min(char_count - cursor);
            let matched = (1..=longest).rev().find_map(|len| {
                let candidate = &line[bounds[cursor]..bounds[cursor + len]];
                self.dictionary
                    .get(candidate)
                    .map(|meaning| (len, candidate, meaning))
            });

            match matched {
                Some((len, candidate, meaning)) => {
                    trace.push(GlossEntry::known(candidate, meaning));
                    parts.push(meaning);
                    cursor += len;
                }
                None => {
                    let ch = &line[bounds[cursor]..bounds[cursor + 1]];
                    trace.push(GlossEntry::unknown(ch));
                    parts.push(ch);
                    cursor += 1;
                }
            }
        }

        Segmentation {
            trace,
            sentence: parts.join(&self.separator),
        }
    }
}

/// Segment `line` with an auto-sized window and space-joined sentence
pub fn segment_and_translate(line: &str, dictionary: &Dictionary) -> Segmentation {
    Segmenter::new(dictionary).segment_and_translate(line)
}

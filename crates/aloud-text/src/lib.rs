//! aloud Text
//!
//! Word segmentation for speakable-text processing.
//!
//! All offsets count Unicode scalar values (`char`s), never bytes.

use unicode_segmentation::UnicodeSegmentation;

/// Check if text is empty or entirely whitespace
pub fn is_whitespace(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Word boundary oracle used when scanning text for clipping.
///
/// Implementations must guarantee progress: with `len = text.chars().count()`
/// and any `from < len`,
/// `from <= word_start(text, from) <= word_end(text, word_start) <= len`
/// and `word_end(text, word_start) > word_start(text, from)`. A stalled
/// segmenter would make the clip scan non-terminating and must not be used.
pub trait WordSegmenter {
    /// Char index of the first word starting at or after `from`
    fn word_start(&self, text: &str, from: usize) -> usize;

    /// Char index one past the end of the word containing `from`
    fn word_end(&self, text: &str, from: usize) -> usize;
}

/// Default segmenter over Unicode word bounds.
///
/// A bound segment counts as a word when it contains alphanumeric content.
/// A trailing run with no further word content is reported as a single
/// segment so callers always make progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWordSegmenter;

impl WordSegmenter for UnicodeWordSegmenter {
    fn word_start(&self, text: &str, from: usize) -> usize {
        let total = text.chars().count();
        if from >= total {
            return total;
        }
        let mut start = 0;
        for segment in text.split_word_bounds() {
            let end = start + segment.chars().count();
            if end > from && segment.chars().any(|c| c.is_alphanumeric()) {
                return start.max(from);
            }
            start = end;
        }
        from
    }

    fn word_end(&self, text: &str, from: usize) -> usize {
        let total = text.chars().count();
        if from >= total {
            return total;
        }
        let mut start = 0;
        for segment in text.split_word_bounds() {
            let end = start + segment.chars().count();
            if end > from {
                return end;
            }
            start = end;
        }
        total
    }
}

//! Sliding-window text chunking
//!
//! Splits combined question/answer text into overlapping windows before
//! embedding. Boundaries are measured in characters, never bytes, so
//! multi-byte UTF-8 text can't be split mid code point.

/// Splitter producing overlapping fixed-size windows over a text
#[derive(Debug, Clone, Copy)]
pub struct TextSplitter {
    chunk_size: usize,
    overlap: usize,
}

impl TextSplitter {
    /// Maximum chunk length in characters
    pub const DEFAULT_CHUNK_SIZE: usize = 500;
    /// Characters shared between consecutive chunks
    pub const DEFAULT_OVERLAP: usize = 50;

    /// Create a splitter; `overlap` must be smaller than `chunk_size` or the
    /// window would never advance.
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be positive");
        assert!(overlap < chunk_size, "overlap must be smaller than chunk_size");
        Self {
            chunk_size,
            overlap,
        }
    }

    /// Lazily iterate the chunks of `text`.
    ///
    /// Deterministic: the same text always yields the same boundaries, and
    /// each call returns a fresh iterator over the full text. Text shorter
    /// than the window yields exactly one chunk equal to the whole text.
    pub fn split<'a>(&self, text: &'a str) -> Chunks<'a> {
        Chunks {
            text,
            start: 0,
            chunk_size: self.chunk_size,
            step: self.chunk_size - self.overlap,
            done: false,
        }
    }
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHUNK_SIZE, Self::DEFAULT_OVERLAP)
    }
}

/// Iterator over the overlapping windows of one text
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    text: &'a str,
    /// Byte offset of the next window start
    start: usize,
    chunk_size: usize,
    step: usize,
    done: bool,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }

        let end = advance_chars(self.text, self.start, self.chunk_size);
        let chunk = &self.text[self.start..end];

        if end >= self.text.len() {
            self.done = true;
        } else {
            self.start = advance_chars(self.text, self.start, self.step);
        }

        Some(chunk)
    }
}

/// Byte offset `count` characters past `from`, clamped to the end of `text`
fn advance_chars(text: &str, from: usize, count: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(count)
        .map_or(text.len(), |(offset, _)| from + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_len(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn test_short_text_yields_single_chunk() {
        let splitter = TextSplitter::default();
        let chunks: Vec<&str> = splitter.split("Question: hi\nAnswer: hello").collect();
        assert_eq!(chunks, vec!["Question: hi\nAnswer: hello"]);
    }

    #[test]
    fn test_exact_window_yields_single_chunk() {
        let splitter = TextSplitter::default();
        let text = "x".repeat(500);
        let chunks: Vec<&str> = splitter.split(&text).collect();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }

    #[test]
    fn test_chunk_length_bounded() {
        let splitter = TextSplitter::default();
        let text = "word ".repeat(400);
        for chunk in splitter.split(&text) {
            assert!(char_len(chunk) <= 500);
        }
    }

    #[test]
    fn test_consecutive_chunks_share_exact_overlap() {
        let splitter = TextSplitter::default();
        let text: String = ('a'..='z').cycle().take(1600).collect();
        let chunks: Vec<&str> = splitter.split(&text).collect();
        assert!(chunks.len() > 1);

        for pair in chunks.windows(2) {
            let prev_tail: String = pair[0].chars().skip(char_len(pair[0]) - 50).collect();
            let next_head: String = pair[1].chars().take(50).collect();
            assert_eq!(prev_tail, next_head);
        }
    }

    #[test]
    fn test_chunks_reconstruct_original_text() {
        let splitter = TextSplitter::default();
        let text: String = ('0'..='9').cycle().take(2345).collect();
        let chunks: Vec<&str> = splitter.split(&text).collect();

        let mut rebuilt: String = chunks[0].to_string();
        for chunk in &chunks[1..] {
            rebuilt.extend(chunk.chars().skip(50));
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_split_is_deterministic_and_restartable() {
        let splitter = TextSplitter::default();
        let text = "abc ".repeat(300);

        let first: Vec<&str> = splitter.split(&text).collect();
        let second: Vec<&str> = splitter.split(&text).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_multibyte_text_splits_on_char_boundaries() {
        let splitter = TextSplitter::new(10, 3);
        let text = "héllo wörld ünïcode tèxt with àccents".repeat(3);

        let chunks: Vec<&str> = splitter.split(&text).collect();
        for chunk in &chunks {
            assert!(char_len(chunk) <= 10);
        }
        // Rebuilding with the 3-char overlap removed gives back the input
        let mut rebuilt: String = chunks[0].to_string();
        for chunk in &chunks[1..] {
            rebuilt.extend(chunk.chars().skip(3));
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_small_window_boundaries() {
        let splitter = TextSplitter::new(5, 2);
        let chunks: Vec<&str> = splitter.split("abcdefghij").collect();
        // step = 3: [0..5), [3..8), [6..10)
        assert_eq!(chunks, vec!["abcde", "defgh", "ghij"]);
    }

    #[test]
    #[should_panic(expected = "overlap must be smaller")]
    fn test_overlap_must_be_smaller_than_chunk_size() {
        let _ = TextSplitter::new(50, 50);
    }
}

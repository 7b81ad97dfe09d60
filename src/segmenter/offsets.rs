//! Char-offset indexing for line text
//!
//! Annotation positions count Unicode scalar values while Rust slices
//! bytes. `CharMap` precomputes the char-to-byte index once per line so
//! the sweep can slice segments in O(1) per boundary.

/// Char-offset view over a line of text
#[derive(Debug)]
pub struct CharMap<'a> {
    text: &'a str,
    /// Byte offset of each char boundary; length is `char_len() + 1`
    byte_index: Vec<usize>,
}

impl<'a> CharMap<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut byte_index: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        byte_index.push(text.len());
        Self { text, byte_index }
    }

    /// Number of chars in the line
    pub fn char_len(&self) -> usize {
        self.byte_index.len() - 1
    }

    /// Slice by char offsets `[start, end)`.
    ///
    /// Caller guarantees `start <= end <= char_len()`; the segmenter only
    /// passes clamped boundaries.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[self.byte_index[start]..self.byte_index[end]]
    }
}

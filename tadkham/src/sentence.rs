//! Internal representation of an input line.

use crate::char_class::CharClass;

/// A line of input decoded for scanning.
///
/// The line is decoded once into a codepoint array together with a
/// codepoint-to-byte offset table (for extracting token surfaces from the
/// original string) and a per-codepoint class table. All buffers are reused
/// across lines by truncate-and-grow.
#[derive(Default, Clone, Debug)]
pub struct Sentence {
    input: String,
    chars: Vec<char>,
    c2b: Vec<usize>,
    classes: Vec<CharClass>,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the internal state.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.input.clear();
        self.chars.clear();
        self.c2b.clear();
        self.classes.clear();
    }

    /// Sets a new input line, clearing the previous state.
    ///
    /// The line is not decoded at this point; call [`compile`](Self::compile)
    /// to populate the codepoint and class tables.
    pub fn set_line<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.clear();
        self.input.push_str(input.as_ref());
    }

    /// Decodes the line, computing the codepoint array, the byte-offset
    /// table, and the class of every codepoint.
    pub fn compile(&mut self) {
        for (bi, ch) in self.input.char_indices() {
            self.chars.push(ch);
            self.c2b.push(bi);
            self.classes.push(CharClass::of(ch));
        }
        self.c2b.push(self.input.len());
    }

    /// Returns the original line.
    #[inline(always)]
    pub fn raw(&self) -> &str {
        &self.input
    }

    /// Returns the codepoint array.
    #[inline(always)]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns the number of codepoints (not bytes).
    #[inline(always)]
    pub fn len_char(&self) -> usize {
        self.chars.len()
    }

    /// Returns the byte offset of the codepoint at `pos_char`.
    ///
    /// `pos_char` may equal [`len_char`](Self::len_char), in which case the
    /// byte length of the line is returned.
    #[inline(always)]
    pub fn byte_position(&self, pos_char: usize) -> usize {
        self.c2b[pos_char]
    }

    /// Returns the class of the codepoint at `pos_char`.
    #[inline(always)]
    pub fn char_class(&self, pos_char: usize) -> CharClass {
        self.classes[pos_char]
    }
}

//! Routines for segmentation.
//!
//! A [`Worker`] owns the scratch buffers of one segmentation unit: the
//! decoded line, the edge lattice, and the recovered token spans. The
//! buffers are reused across lines to avoid repeated allocation.

use crate::segmenter::lattice::{Lattice, TokenSpan};
use crate::segmenter::Segmenter;
use crate::sentence::Sentence;
use crate::token::{Token, TokenIter};

/// A segmentation worker.
///
/// Workers are created with [`Segmenter::new_worker`]. Each worker owns its
/// scratch and can run independently of any other worker; the dictionary is
/// shared behind the segmenter handle.
///
/// # Example
///
/// ```
/// use tadkham::{Dictionary, Segmenter};
///
/// let segmenter = Segmenter::new(Dictionary::from_words(["กา", "แฟ"]));
/// let mut worker = segmenter.new_worker();
///
/// worker.reset_line("กาแฟ");
/// worker.segment();
/// assert_eq!(worker.num_tokens(), 2);
/// assert_eq!(worker.token(0).surface(), "กา");
/// ```
pub struct Worker {
    pub(crate) segmenter: Segmenter,
    pub(crate) sent: Sentence,
    pub(crate) lattice: Lattice,
    pub(crate) spans: Vec<TokenSpan>,
}

impl Worker {
    pub(crate) fn new(segmenter: Segmenter) -> Self {
        Self {
            segmenter,
            sent: Sentence::new(),
            lattice: Lattice::default(),
            spans: vec![],
        }
    }

    /// Resets the line to be segmented, clearing the previous result.
    pub fn reset_line<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.sent.clear();
        self.spans.clear();
        let input = input.as_ref();
        if !input.is_empty() {
            self.sent.set_line(input);
            self.sent.compile();
        }
    }

    /// Segments the current line.
    ///
    /// The result is stored in the worker and accessed through
    /// [`num_tokens`](Self::num_tokens), [`token`](Self::token), and
    /// [`token_iter`](Self::token_iter). An empty line produces no tokens.
    pub fn segment(&mut self) {
        if self.sent.chars().is_empty() {
            return;
        }
        self.lattice
            .build(&self.sent, self.segmenter.dictionary().trie());
        self.lattice.append_spans(&mut self.spans);
    }

    /// Number of tokens in the result.
    #[inline(always)]
    pub fn num_tokens(&self) -> usize {
        self.spans.len()
    }

    /// Returns the `i`-th token of the result.
    ///
    /// # Panics
    ///
    /// Panics when `i >= self.num_tokens()`.
    #[inline(always)]
    pub fn token(&self, i: usize) -> Token<'_> {
        assert!(i < self.num_tokens());
        Token::new(self, i)
    }

    /// Returns an iterator over the tokens of the result.
    #[inline(always)]
    pub fn token_iter(&self) -> TokenIter<'_> {
        TokenIter::new(self)
    }
}

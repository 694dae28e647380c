//! The segmenter and its worker.
//!
//! [`Segmenter`] is a cheap-to-clone handle over a shared, immutable
//! [`Dictionary`]. It creates [`Worker`]s, which hold the per-line scratch
//! and produce the actual tokens. Any number of workers may run concurrently
//! against the same segmenter; the dictionary is only ever read.
//!
//! # Example
//!
//! ```
//! use tadkham::{Dictionary, Segmenter};
//!
//! let dict = Dictionary::from_words(["กา", "กาแฟ", "แฟ"]);
//! let segmenter = Segmenter::new(dict);
//! let mut worker = segmenter.new_worker();
//!
//! worker.reset_line("กาแฟ");
//! worker.segment();
//! assert_eq!(worker.num_tokens(), 1);
//! assert_eq!(worker.token(0).surface(), "กาแฟ");
//! ```

pub(crate) mod lattice;
pub mod worker;

use std::sync::Arc;

use crate::dictionary::Dictionary;
use crate::segmenter::worker::Worker;

pub use crate::segmenter::lattice::EdgeKind;

/// A handle for segmentation over a shared dictionary.
#[derive(Debug, Clone)]
pub struct Segmenter {
    dict: Arc<Dictionary>,
}

impl Segmenter {
    /// Creates a new segmenter, taking ownership of the dictionary.
    ///
    /// To share one dictionary among several segmenters without reloading
    /// it, use [`Segmenter::from_shared_dictionary`].
    pub fn new(dict: Dictionary) -> Self {
        Self {
            dict: Arc::new(dict),
        }
    }

    /// Creates a new segmenter from a shared dictionary.
    pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
        Self { dict }
    }

    /// Returns a reference to the dictionary.
    #[inline(always)]
    pub(crate) fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Creates a new worker.
    ///
    /// Each worker owns its own scratch buffers, so workers can segment
    /// different lines in parallel.
    pub fn new_worker(&self) -> Worker {
        Worker::new(self.clone())
    }

    /// Segments a single line into owned token strings.
    ///
    /// This is a convenience wrapper that allocates a fresh worker per call;
    /// for bulk work, keep a [`Worker`] and reuse it across lines. The
    /// concatenation of the returned tokens equals `line`, and no token is
    /// empty.
    pub fn segment(&self, line: &str) -> Vec<String> {
        let mut worker = self.new_worker();
        worker.reset_line(line);
        worker.segment();
        worker
            .token_iter()
            .map(|t| t.surface().to_string())
            .collect()
    }
}

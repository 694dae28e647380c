//! # Tadkham
//!
//! Dictionary-driven word segmentation for Thai and other unsegmented
//! scripts.
//!
//! Input text in an unsegmented script carries no whitespace between words;
//! a word list is the authority on token boundaries. Given a line and a
//! dictionary, this crate partitions the line into tokens that cover it
//! exactly once, preferring partitions with the fewest unknown stretches
//! and, among those, the fewest (hence longest) tokens. Contiguous runs of
//! Latin letters or whitespace are kept together as single tokens, and text
//! that matches no dictionary word falls back to unknown tokens, so every
//! input yields a well-formed partition.
//!
//! The dictionary is indexed once in a hash-addressed prefix tree and is
//! immutable afterwards, so it can be shared across any number of threads.
//! Per-line scratch lives in a [`Worker`], which reuses its buffers across
//! lines.
//!
//! ## Example
//!
//! ```
//! use tadkham::{Dictionary, Segmenter};
//!
//! let dict = Dictionary::from_words(["กา", "กาแฟ", "แฟ", "มา"]);
//! let segmenter = Segmenter::new(dict);
//! let mut worker = segmenter.new_worker();
//!
//! worker.reset_line("มากาแฟ");
//! worker.segment();
//! assert_eq!(worker.num_tokens(), 2);
//! assert_eq!(worker.token(0).surface(), "มา");
//! assert_eq!(worker.token(1).surface(), "กาแฟ");
//!
//! // Or, when owned strings are more convenient:
//! assert_eq!(segmenter.segment("มากาแฟ"), vec!["มา", "กาแฟ"]);
//! ```

/// Codepoint classification.
pub mod char_class;

/// Word-list loading and the prefix tree.
pub mod dictionary;

/// Definitions of errors.
pub mod errors;

/// Internal representation of an input line.
mod sentence;

/// The segmenter and its worker.
pub mod segmenter;

/// Resultant tokens.
pub mod token;

#[cfg(test)]
mod tests;

// Re-exports
pub use char_class::CharClass;
pub use dictionary::Dictionary;
pub use errors::{Result, TadkhamError};
pub use segmenter::worker::Worker;
pub use segmenter::{EdgeKind, Segmenter};
pub use token::{Token, TokenIter};

/// The version number of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Word lists for segmentation.
//!
//! A dictionary is built once from a word list and is immutable afterwards.
//! Word lists can come from an in-memory iterator ([`Dictionary::from_words`]),
//! any buffered reader ([`Dictionary::from_reader`]), or a file on disk
//! ([`Dictionary::from_path`]).
//!
//! The on-disk format is UTF-8 text with one word per line. Empty lines are
//! ignored. Surrounding whitespace is significant and is not stripped, so a
//! line `"กา "` defines a word with a trailing space. Duplicate entries and
//! the order of entries are irrelevant.

pub(crate) mod trie;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::dictionary::trie::PrefixTree;
use crate::errors::{Result, TadkhamError};

/// An immutable word dictionary.
///
/// Internally the dictionary indexes its words in a [`PrefixTree`] keyed for
/// incremental per-codepoint matching. Once constructed it is read-only and
/// safe to share across threads, typically behind an `Arc` via
/// [`Segmenter`](crate::Segmenter).
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    trie: PrefixTree,
    num_words: usize,
}

impl Dictionary {
    /// Builds a dictionary from an iterator of words.
    ///
    /// Empty words are skipped. This constructor cannot fail: an empty input
    /// yields an empty dictionary, against which segmentation is still valid
    /// and produces all-unknown partitions.
    ///
    /// # Example
    ///
    /// ```
    /// use tadkham::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["กา", "กาแฟ", "แฟ"]);
    /// assert_eq!(dict.num_words(), 3);
    /// ```
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .collect();
        let num_words = words.len();
        Self {
            trie: PrefixTree::from_words(words),
            num_words,
        }
    }

    /// Reads a word list from a buffered reader, one word per line.
    ///
    /// Empty lines are skipped; whitespace within a line is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error when reading from `rdr` fails or the content is not
    /// valid UTF-8.
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: BufRead,
    {
        let mut words = vec![];
        for line in rdr.lines() {
            let line = line?;
            if !line.is_empty() {
                words.push(line);
            }
        }
        let num_words = words.len();
        Ok(Self {
            trie: PrefixTree::from_words(words),
            num_words,
        })
    }

    /// Reads a word list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`TadkhamError::PathIsDirectory`] when `path` points at a
    /// directory, or an I/O error when the file cannot be read.
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(TadkhamError::PathIsDirectory(path.to_path_buf()));
        }
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Number of (non-empty) words the dictionary was built from.
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    #[inline(always)]
    pub(crate) fn trie(&self) -> &PrefixTree {
        &self.trie
    }
}

//! The edge lattice at the heart of segmentation.
//!
//! A single left-to-right scan over the line builds a back-pointer array with
//! one entry per codepoint boundary. Entry `i` describes the best-known last
//! token of a partition of the first `i` codepoints, together with the cost
//! of that partition. Walking the array backwards from the final boundary
//! recovers the optimal partition.
//!
//! Cost is the pair `(unk_count, word_count)`, minimised lexicographically:
//! any number of dictionary words beats a single unknown token, and among
//! equally-unknown partitions the one with fewer tokens wins, with ties
//! resolved in favour of longer matches.

use crate::char_class::CharClass;
use crate::dictionary::trie::PrefixTree;
use crate::sentence::Sentence;

/// Kind of a lattice edge, surfaced on output tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// The sentinel at boundary 0. Never appears on an emitted token.
    Init,
    /// A dictionary word.
    Dict,
    /// Text that matched no dictionary word.
    Unknown,
    /// A contiguous run of Latin letters.
    Latin,
    /// A contiguous run of space-class codepoints.
    Space,
}

/// One entry of the back-pointer array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Codepoint index at which the token ending at this boundary begins.
    pub start: usize,
    pub kind: EdgeKind,
    /// Total number of tokens in the partition ending at this boundary.
    pub word_count: usize,
    /// How many of those tokens are unknown.
    pub unk_count: usize,
}

impl Edge {
    const fn init() -> Self {
        Self {
            start: 0,
            kind: EdgeKind::Init,
            word_count: 0,
            unk_count: 0,
        }
    }

    /// Compares partition costs: `(unk_count, word_count)`, lexicographic,
    /// strict. A candidate replaces the incumbent unless the incumbent is
    /// strictly better, so among equal-cost candidates the one evaluated
    /// last wins.
    fn is_better_than(&self, other: &Self) -> bool {
        self.unk_count < other.unk_count
            || (self.unk_count == other.unk_count && self.word_count < other.word_count)
    }
}

/// An in-progress dictionary match.
///
/// `depth` is the number of codepoints matched so far; `is_final` records
/// whether the most recent transition completed a word.
#[derive(Debug, Clone, Copy, Default)]
struct MatchPointer {
    node_id: usize,
    depth: usize,
    is_final: bool,
}

/// A token span recovered from the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    /// Start codepoint index, inclusive.
    pub start: usize,
    /// End codepoint index, exclusive.
    pub end: usize,
    pub kind: EdgeKind,
}

/// Scratch state for one line's scan.
///
/// Both buffers are reused across lines by truncate-and-grow; [`build`]
/// clears them for the current line.
///
/// [`build`]: Self::build
#[derive(Debug, Default)]
pub struct Lattice {
    edges: Vec<Edge>,
    pointers: Vec<MatchPointer>,
}

impl Lattice {
    /// Scans `sent` and fills the back-pointer array.
    ///
    /// For each codepoint, in order:
    ///
    /// 1. A run of the opposite class is flushed: its edge replaces the
    ///    provisional edge at the run's end boundary, and the left boundary
    ///    advances to the current position.
    /// 2. A Latin or space codepoint opens (or extends) the run of its
    ///    class; the run closes early when the line ends on it.
    /// 3. A text codepoint advances the live dictionary matches; every match
    ///    that completed a word on this step proposes a candidate edge.
    /// 4. If no candidate was chosen, the unknown fallback edge from the
    ///    current left boundary is written instead; the left boundary moves
    ///    only when a real edge was chosen, so consecutive unknown positions
    ///    collapse into a single unknown token.
    pub fn build(&mut self, sent: &Sentence, trie: &PrefixTree) {
        let chars = sent.chars();

        self.edges.clear();
        self.edges.reserve(chars.len() + 1);
        self.edges.push(Edge::init());
        self.pointers.clear();

        let mut left_boundary = 0;
        let mut latin_run: Option<usize> = None;
        let mut space_run: Option<usize> = None;

        for (i, &ch) in chars.iter().enumerate() {
            let class = sent.char_class(i);

            if class != CharClass::Space {
                if let Some(start) = space_run.take() {
                    let edge = self.run_edge(start, EdgeKind::Space);
                    self.edges[i] = edge;
                    left_boundary = i;
                }
            }
            if class != CharClass::Latin {
                if let Some(start) = latin_run.take() {
                    let edge = self.run_edge(start, EdgeKind::Latin);
                    self.edges[i] = edge;
                    left_boundary = i;
                }
            }

            let mut best: Option<Edge> = None;
            match class {
                CharClass::Latin => {
                    let start = *latin_run.get_or_insert(i);
                    if i + 1 == chars.len() {
                        best = Some(self.run_edge(start, EdgeKind::Latin));
                    }
                }
                CharClass::Space => {
                    let start = *space_run.get_or_insert(i);
                    if i + 1 == chars.len() {
                        best = Some(self.run_edge(start, EdgeKind::Space));
                    }
                }
                CharClass::Text => {
                    self.advance_pointers(ch, trie);
                    for p in &self.pointers {
                        if !p.is_final {
                            continue;
                        }
                        let start = i + 1 - p.depth;
                        let source = self.edges[start];
                        let cand = Edge {
                            start,
                            kind: EdgeKind::Dict,
                            word_count: source.word_count + 1,
                            unk_count: source.unk_count,
                        };
                        best = match best {
                            Some(b) if b.is_better_than(&cand) => Some(b),
                            _ => Some(cand),
                        };
                    }
                }
            }

            let chosen = match best {
                Some(edge) => {
                    left_boundary = i + 1;
                    edge
                }
                None => {
                    let source = self.edges[left_boundary];
                    Edge {
                        start: left_boundary,
                        kind: EdgeKind::Unknown,
                        word_count: source.word_count + 1,
                        unk_count: source.unk_count + 1,
                    }
                }
            };
            self.edges.push(chosen);
        }
    }

    /// Advances every live match pointer over `ch`, dropping the ones with
    /// no outgoing transition. A fresh root pointer is appended first, so a
    /// new potential match starts at every text codepoint. Compaction is in
    /// place and preserves spawn order.
    fn advance_pointers(&mut self, ch: char, trie: &PrefixTree) {
        self.pointers.push(MatchPointer::default());
        let mut retained = 0;
        for idx in 0..self.pointers.len() {
            let mut p = self.pointers[idx];
            if let Some(t) = trie.lookup(p.node_id, p.depth, ch) {
                p.node_id = t.child_id;
                p.depth += 1;
                p.is_final = t.is_final;
                self.pointers[retained] = p;
                retained += 1;
            }
        }
        self.pointers.truncate(retained);
    }

    fn run_edge(&self, start: usize, kind: EdgeKind) -> Edge {
        let source = self.edges[start];
        Edge {
            start,
            kind,
            word_count: source.word_count + 1,
            unk_count: source.unk_count,
        }
    }

    /// Walks the back-pointer array from the final boundary to 0 and appends
    /// the token spans of the optimal partition, in source order.
    pub fn append_spans(&self, spans: &mut Vec<TokenSpan>) {
        debug_assert!(!self.edges.is_empty());
        let first = spans.len();
        let mut end = self.edges.len() - 1;
        while end > 0 {
            let edge = self.edges[end];
            spans.push(TokenSpan {
                start: edge.start,
                end,
                kind: edge.kind,
            });
            end = edge.start;
        }
        spans[first..].reverse();
    }
}

//! Hash-addressed prefix tree over the word list.

use hashbrown::HashMap;

/// A transition key.
///
/// Nodes are addressed by `(node_id, depth)`, where `node_id` is the index of
/// the first sorted word that introduced the node and `depth` is the 0-based
/// position of the codepoint within that word. The root is `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TransitionKey {
    node_id: usize,
    depth: usize,
    ch: char,
}

/// The value half of a trie edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Destination node, to be used as `node_id` for the next step.
    pub child_id: usize,
    /// True if some word ends exactly at this edge.
    pub is_final: bool,
}

/// A prefix tree for incremental, per-codepoint word matching.
///
/// The tree is a flat mapping from [`TransitionKey`] to [`Transition`],
/// immutable once built. Lookups are O(1) expected and take `&self` only, so
/// the tree can be queried from any number of threads without locking.
#[derive(Debug, Default, Clone)]
pub struct PrefixTree {
    map: HashMap<TransitionKey, Transition>,
}

impl PrefixTree {
    /// Builds a prefix tree from a word list.
    ///
    /// The list is sorted lexicographically by codepoint sequence so that
    /// words sharing a prefix are processed consecutively; the first word to
    /// introduce a path through a `(node_id, depth)` state claims its own
    /// index as the child id for that state. Later words sharing the prefix
    /// follow the existing transition, which keeps a previously recorded
    /// `is_final` intact: a shorter word sorts before any word it prefixes.
    ///
    /// Empty words contribute no transitions. Duplicates are harmless.
    pub fn from_words(mut words: Vec<String>) -> Self {
        words.sort_unstable();

        let mut map = HashMap::new();
        for (i, word) in words.iter().enumerate() {
            let mut row = 0;
            let mut depth = 0;
            let mut chars = word.chars().peekable();
            while let Some(ch) = chars.next() {
                let is_final = chars.peek().is_none();
                match map.entry(TransitionKey { node_id: row, depth, ch }) {
                    hashbrown::hash_map::Entry::Vacant(e) => {
                        e.insert(Transition { child_id: i, is_final });
                        row = i;
                    }
                    hashbrown::hash_map::Entry::Occupied(e) => {
                        row = e.get().child_id;
                    }
                }
                depth += 1;
            }
        }
        Self { map }
    }

    /// Follows the edge labelled `ch` out of the node `(node_id, depth)`.
    #[inline(always)]
    pub fn lookup(&self, node_id: usize, depth: usize, ch: char) -> Option<Transition> {
        self.map.get(&TransitionKey { node_id, depth, ch }).copied()
    }

    /// Number of transitions in the tree.
    #[inline(always)]
    pub fn num_transitions(&self) -> usize {
        self.map.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(words: &[&str]) -> PrefixTree {
        PrefixTree::from_words(words.iter().map(|w| w.to_string()).collect())
    }

    /// Walks the tree along `word` and returns the last transition taken.
    fn walk(tree: &PrefixTree, word: &str) -> Option<Transition> {
        let mut row = 0;
        let mut last = None;
        for (depth, ch) in word.chars().enumerate() {
            let t = tree.lookup(row, depth, ch)?;
            row = t.child_id;
            last = Some(t);
        }
        last
    }

    #[test]
    fn test_one_char() {
        let tree = tree(&["A"]);
        assert_eq!(
            tree.lookup(0, 0, 'A'),
            Some(Transition { child_id: 0, is_final: true })
        );
    }

    #[test]
    fn test_one_word() {
        let tree = tree(&["AB"]);
        assert_eq!(
            tree.lookup(0, 0, 'A'),
            Some(Transition { child_id: 0, is_final: false })
        );
        assert_eq!(
            tree.lookup(0, 1, 'B'),
            Some(Transition { child_id: 0, is_final: true })
        );
    }

    #[test]
    fn test_shared_prefix() {
        let tree = tree(&["AB", "AC", "D"]);
        assert_eq!(
            tree.lookup(0, 0, 'A'),
            Some(Transition { child_id: 0, is_final: false })
        );
        assert_eq!(
            tree.lookup(0, 1, 'B'),
            Some(Transition { child_id: 0, is_final: true })
        );
        assert_eq!(
            tree.lookup(0, 1, 'C'),
            Some(Transition { child_id: 1, is_final: true })
        );
        assert_eq!(
            tree.lookup(0, 0, 'D'),
            Some(Transition { child_id: 2, is_final: true })
        );
        assert_eq!(tree.lookup(0, 0, 'E'), None);
    }

    #[test]
    fn test_thai_word() {
        let tree = tree(&["กา"]);
        assert_eq!(
            tree.lookup(0, 0, 'ก'),
            Some(Transition { child_id: 0, is_final: false })
        );
        assert_eq!(
            tree.lookup(0, 1, 'า'),
            Some(Transition { child_id: 0, is_final: true })
        );
    }

    #[test]
    fn test_is_final_preserved_under_longer_word() {
        // "กา" is a prefix of "กาแฟ" and sorts before it; traversing the
        // longer word must not clear the final marker on the shorter one.
        let tree = tree(&["กา", "กาแฟ", "แฟ"]);
        assert_eq!(walk(&tree, "กา").map(|t| t.is_final), Some(true));
        assert_eq!(walk(&tree, "กาแฟ").map(|t| t.is_final), Some(true));
        assert_eq!(walk(&tree, "แฟ").map(|t| t.is_final), Some(true));
    }

    #[test]
    fn test_every_word_reaches_a_final_transition() {
        let words = ["มาตรา", "มา", "ตรา", "กาแฟ", "A", "AB"];
        let tree = tree(&words);
        for word in words {
            let last = walk(&tree, word);
            assert_eq!(last.map(|t| t.is_final), Some(true), "{word}");
        }
    }

    #[test]
    fn test_strict_prefix_is_not_final() {
        let tree = tree(&["มาตรา"]);
        assert_eq!(walk(&tree, "มาตร").map(|t| t.is_final), Some(false));
        assert_eq!(walk(&tree, "มาตรา").map(|t| t.is_final), Some(true));
    }

    #[test]
    fn test_duplicates_are_harmless() {
        let once = tree(&["กา", "แฟ"]);
        let twice = tree(&["กา", "กา", "แฟ"]);
        assert_eq!(once.num_transitions(), twice.num_transitions());
        assert_eq!(walk(&twice, "กา").map(|t| t.is_final), Some(true));
    }

    #[test]
    fn test_empty_list() {
        let tree = tree(&[]);
        assert_eq!(tree.num_transitions(), 0);
        assert_eq!(tree.lookup(0, 0, 'ก'), None);
    }
}

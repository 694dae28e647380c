use std::sync::Arc;

use crate::{Dictionary, EdgeKind, Segmenter};

fn segmenter(words: &[&str]) -> Segmenter {
    Segmenter::new(Dictionary::from_words(words.iter().copied()))
}

#[test]
fn single_latin_letter_in_dictionary() {
    // A one-letter Latin line closes as a Latin run; the output is the same
    // string either way.
    assert_eq!(segmenter(&["A"]).segment("A"), vec!["A"]);
}

#[test]
fn shared_prefix_words_split_correctly() {
    let segmenter = segmenter(&["กข", "กค", "ง"]);
    assert_eq!(segmenter.segment("กขงกค"), vec!["กข", "ง", "กค"]);
}

#[test]
fn longest_match_wins_at_equal_unknown_count() {
    // Both "กาแฟ" and "กา"+"แฟ" cover the line with no unknowns; the
    // single-token partition has the smaller word count and wins.
    let segmenter = segmenter(&["กา", "กาแฟ", "แฟ"]);
    assert_eq!(segmenter.segment("กาแฟ"), vec!["กาแฟ"]);
}

#[test]
fn whole_line_single_word() {
    assert_eq!(segmenter(&["มาตรา"]).segment("มาตรา"), vec!["มาตรา"]);
}

#[test]
fn latin_and_space_runs() {
    let segmenter = segmenter(&["ab"]);
    assert_eq!(segmenter.segment("ab cd"), vec!["ab", " ", "cd"]);
}

#[test]
fn latin_run_beats_unknown_with_empty_dictionary() {
    let segmenter = segmenter(&[]);
    let mut worker = segmenter.new_worker();
    worker.reset_line("xyz");
    worker.segment();
    assert_eq!(worker.num_tokens(), 1);
    assert_eq!(worker.token(0).surface(), "xyz");
    assert_eq!(worker.token(0).kind(), EdgeKind::Latin);
}

#[test]
fn empty_line_yields_no_tokens() {
    assert_eq!(segmenter(&["A"]).segment(""), Vec::<String>::new());
}

#[test]
fn empty_dictionary_yields_unknown_partition() {
    let segmenter = segmenter(&[]);
    let mut worker = segmenter.new_worker();
    worker.reset_line("ฮฮฮ");
    worker.segment();
    assert_eq!(worker.num_tokens(), 1);
    assert_eq!(worker.token(0).surface(), "ฮฮฮ");
    assert_eq!(worker.token(0).kind(), EdgeKind::Unknown);
}

#[test]
fn unknown_run_collapses_to_one_token() {
    // Unknown stretches between real boundaries come out as one token, not
    // one token per codepoint.
    let segmenter = segmenter(&["กา"]);
    assert_eq!(segmenter.segment("กาฮฮฮกา"), vec!["กา", "ฮฮฮ", "กา"]);
}

#[test]
fn unknown_tail_after_dictionary_word() {
    let segmenter = segmenter(&["กา"]);
    assert_eq!(segmenter.segment("กาฮฮ"), vec!["กา", "ฮฮ"]);
}

#[test]
fn all_whitespace_line_is_one_space_token() {
    let segmenter = segmenter(&["กา"]);
    let mut worker = segmenter.new_worker();
    worker.reset_line("  \t ");
    worker.segment();
    assert_eq!(worker.num_tokens(), 1);
    assert_eq!(worker.token(0).kind(), EdgeKind::Space);
}

#[test]
fn curly_double_quotes_are_space_single_are_not() {
    let segmenter = segmenter(&["กา"]);
    // U+201C/U+201D delimit like whitespace.
    assert_eq!(
        segmenter.segment("\u{201C}กา\u{201D}"),
        vec!["\u{201C}", "กา", "\u{201D}"]
    );
    // U+2018/U+2019 are ordinary text and end up in an unknown token.
    let mut worker = segmenter.new_worker();
    worker.reset_line("\u{2018}กา");
    worker.segment();
    assert_eq!(worker.token(0).surface(), "\u{2018}");
    assert_eq!(worker.token(0).kind(), EdgeKind::Unknown);
    assert_eq!(worker.token(1).surface(), "กา");
}

#[test]
fn fewer_unknowns_beat_equal_token_count() {
    // "กข" + unknown "ค" and "ก" + "ขค" are both two tokens, but only the
    // latter has no unknowns.
    let segmenter = segmenter(&["กข", "ก", "ขค"]);
    assert_eq!(segmenter.segment("กขค"), vec!["ก", "ขค"]);
}

#[test]
fn concatenation_identity_holds() {
    let segmenter = segmenter(&["กา", "กาแฟ", "แฟ", "มา"]);
    for line in [
        "",
        "กาแฟ",
        "มากาแฟ abc กาฮฮ",
        "  ",
        "xyzกา(ab)แฟ",
        "\u{201C}ฮ\u{201D}\u{2018}ฮ\u{2019}",
    ] {
        let tokens = segmenter.segment(line);
        assert_eq!(tokens.concat(), line, "{line:?}");
        assert!(tokens.iter().all(|t| !t.is_empty()), "{line:?}");
    }
}

#[test]
fn segmentation_is_deterministic() {
    let segmenter = segmenter(&["กา", "กาแฟ", "แฟ", "มา"]);
    let line = "มากาแฟ abกาฮแฟ";
    let first = segmenter.segment(line);
    for _ in 0..10 {
        assert_eq!(segmenter.segment(line), first);
    }
}

#[test]
fn worker_is_reusable_across_lines() {
    let segmenter = segmenter(&["กา", "แฟ"]);
    let mut worker = segmenter.new_worker();

    worker.reset_line("กาแฟ");
    worker.segment();
    assert_eq!(worker.num_tokens(), 2);

    worker.reset_line("");
    worker.segment();
    assert_eq!(worker.num_tokens(), 0);

    worker.reset_line("แฟ");
    worker.segment();
    assert_eq!(worker.num_tokens(), 1);
    assert_eq!(worker.token(0).surface(), "แฟ");
}

#[test]
fn dictionary_is_shareable_across_threads() {
    let dict = Arc::new(Dictionary::from_words(["กา", "แฟ"]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let segmenter = Segmenter::from_shared_dictionary(Arc::clone(&dict));
            std::thread::spawn(move || segmenter.segment("กาแฟ"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["กา", "แฟ"]);
    }
}

#[test]
fn mixed_scripts_round_trip() {
    let segmenter = segmenter(&["กาแฟ", "มา"]);
    assert_eq!(
        segmenter.segment("drink กาแฟ (now)"),
        vec!["drink", " ", "กาแฟ", " (", "now", ")"]
    );
}

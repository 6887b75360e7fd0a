use super::prelude::{cardinal, classify, magnitude, normalize, scan_words, word_listing, Spanned, WordClass};

#[test]
fn test_normalize() {
    let pairs = vec![
        ("Ikki", "ikki"),
        ("besh,", "besh"),
        ("uch?!", "uch"),
        ("qo’sh", "qo'sh"),
        ("o`n", "o'n"),
        ("  TO'RT.  ", "to'rt"),
        ("", ""),
    ];

    for (idx, (raw, expected)) in pairs.iter().enumerate() {
        assert_eq!(
            normalize(raw), *expected,
            "Normalized word does not match expected word ({raw:?}) at {idx}"
        );
    }
}

#[test]
fn test_cardinals() {
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
            cardinal(word), Some(*value),
            "Cardinal value does not match expected value ({word:?}) at {idx}"
        );
    }

    assert_eq!(cardinal("ming"), None);
    assert_eq!(cardinal("salom"), None);
}

#[test]
fn test_magnitudes() {
    let pairs = vec![
        ("yuz", 100),
        ("ming", 1_000),
        ("million", 1_000_000),
        ("milliard", 1_000_000_000),
    ];

    for (idx, (word, value)) in pairs.iter().enumerate() {
        assert_eq!(
            magnitude(word), Some(*value),
            "Magnitude value does not match expected value ({word:?}) at {idx}"
        );
    }

    assert_eq!(magnitude("besh"), None);
}

#[test]
fn test_classify() {
    assert_eq!(classify("42"), WordClass::Literal(42));
    assert_eq!(classify("besh"), WordClass::Cardinal(5));
    assert_eq!(classify("ming"), WordClass::Magnitude(1_000));
    assert_eq!(classify("salom"), WordClass::Unknown);
}

#[test]
fn test_scanner_spans() {
    let input = "ikki  qo'sh uch";

    let words = scan_words(input, 0).collect::<Vec<Spanned>>();

    assert_eq!(words, vec![
        (0, "ikki".to_string(), 4),
        (6, "qo'sh".to_string(), 11),
        (12, "uch".to_string(), 15),
    ]);
}

#[test]
fn test_scanner_base_offset() {
    let words = scan_words("uch", 11).collect::<Vec<Spanned>>();

    assert_eq!(words, vec![(11, "uch".to_string(), 14)]);
}

#[test]
fn test_scanner_empty_input() {
    assert_eq!(scan_words("", 0).next(), None);
    assert_eq!(scan_words("   ", 0).next(), None);
}

#[test]
fn test_word_listing() {
    let entries = word_listing("Besh, qwerty 7");

    let classes = entries.iter()
        .map(|entry| entry.class)
        .collect::<Vec<WordClass>>();

    assert_eq!(classes, vec![
        WordClass::Cardinal(5),
        WordClass::Unknown,
        WordClass::Literal(7),
    ]);

    assert_eq!(entries[0].word, "Besh,");
}

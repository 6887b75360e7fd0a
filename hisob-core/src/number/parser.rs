use crate::lexicon::prelude::{classify, normalize, scan_words, WordClass};
use crate::utils::prelude::{PhraseWarning, PhraseWarningEmitter, SrcSpan};

/// Accumulator for the magnitude group being read. `current` collects
/// additive words until a magnitude word closes the group into `total`.
/// Never fails: words the lexicon does not know contribute nothing.
#[derive(Debug, Default)]
pub struct NumberParser {
    total: i64,
    current: i64,
}

impl NumberParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse<T: Iterator<Item = (u32, String, u32)>>(
        mut self,
        words: T,
        warnings: &PhraseWarningEmitter
    ) -> i64 {
        for (start, word, end) in words {
            let word = normalize(&word);

            if word.is_empty() {
                continue;
            }

            match classify(&word) {
                WordClass::Literal(value) => self.current += value,
                WordClass::Cardinal(value) => self.current += value,
                WordClass::Magnitude(value) => self.flush(value),
                WordClass::Unknown => {
                    warnings.emit(PhraseWarning::UnknownWord {
                        location: SrcSpan::from(start, end),
                        word,
                    });
                }
            }
        }

        self.total + self.current
    }

    // A bare magnitude word means one of it, so `ming` alone is 1000.
    // Each group closes on its own: `uch yuz ming` is 300 + 1000, the
    // flushed 300 does not feed the following `ming`.
    fn flush(&mut self, magnitude: i64) {
        if self.current == 0 {
            self.current = 1;
        }

        self.total += self.current * magnitude;
        self.current = 0;
    }
}

/// Parses an operand cut out of a phrase at byte offset `base`.
pub fn parse_operand(text: &str, base: u32, warnings: &PhraseWarningEmitter) -> i64 {
    NumberParser::new().parse(scan_words(text, base), warnings)
}

/// Parses a whole phrase as a number, discarding warnings.
pub fn parse_number(text: &str) -> i64 {
    parse_operand(text, 0, &PhraseWarningEmitter::null())
}

use crate::lexicon::prelude::scan_words;
use crate::utils::prelude::{PhraseWarning, PhraseWarningEmitter, SrcSpan};

use super::error::{ResolveError, ResolveErrorType};
use super::expression::{Expression, Operand};
use super::operator::Operator;

/// Finds the first operator category whose vocabulary occurs in the
/// phrase. Only lowercasing is applied, so a typographic apostrophe in
/// the phrase will not match the `'` the vocabulary is written with.
pub fn detect_operator(text: &str) -> Result<Operator, ResolveError> {
    let lower = text.to_lowercase();

    for operator in Operator::PRIORITY {
        if operator.terms().iter().any(|term| lower.contains(term)) {
            return Ok(operator);
        }
    }

    Err(ResolveError {
        error: ResolveErrorType::OperatorNotFound,
        span: SrcSpan::whole(text),
    })
}

/// Splits the phrase around the first split-vocabulary term that
/// leaves text on both sides. Terms are tried in their fixed order; a
/// hit at the very edge of the phrase is skipped and the scan goes on.
/// With no usable hit the phrase is cut at its word midpoint instead.
pub fn split_by_operator(
    text: &str,
    operator: Operator,
    warnings: &PhraseWarningEmitter
) -> Expression {
    let lower = text.to_lowercase();

    for term in operator.split_terms() {
        let Some(idx) = lower.find(term) else {
            continue;
        };
        let term_end = idx + term.len();

        // Lowercasing a handful of characters changes their UTF-8
        // length; when the offsets no longer line up with the original
        // text, treat the term as unusable rather than slice mid-char.
        let (Some(left), Some(right)) = (text.get(..idx), text.get(term_end..)) else {
            continue;
        };

        let left = trim_operand(left, 0);
        let right = trim_operand(right, term_end as u32);

        if !left.text.is_empty() && !right.text.is_empty() {
            return Expression {
                operator,
                left,
                right,
                location: SrcSpan::from(idx as u32, term_end as u32),
            };
        }
    }

    midpoint_split(text, operator, warnings)
}

pub fn resolve(text: &str, warnings: &PhraseWarningEmitter) -> Result<Expression, ResolveError> {
    let operator = detect_operator(text)?;

    Ok(split_by_operator(text, operator, warnings))
}

// Cuts the phrase at the start of its middle word. The operator word
// lands in one of the operands as an unparsed token, which is harmless
// since the number parser skips what it does not know.
fn midpoint_split(
    text: &str,
    operator: Operator,
    warnings: &PhraseWarningEmitter
) -> Expression {
    warnings.emit(PhraseWarning::MidpointSplit {
        location: SrcSpan::whole(text),
    });

    let words = scan_words(text, 0).collect::<Vec<_>>();
    let mid = words.len() / 2;

    let split_at = match words.get(mid) {
        Some((start, _, _)) => *start as usize,
        None => text.len(),
    };

    Expression {
        operator,
        left: trim_operand(&text[..split_at], 0),
        right: trim_operand(&text[split_at..], split_at as u32),
        location: SrcSpan::whole(text),
    }
}

fn trim_operand(text: &str, base: u32) -> Operand {
    let trimmed = text.trim_start();
    let start = base + (text.len() - trimmed.len()) as u32;
    let trimmed = trimmed.trim_end();

    Operand {
        text: trimmed.to_string(),
        location: SrcSpan::from(start, start + trimmed.len() as u32),
    }
}

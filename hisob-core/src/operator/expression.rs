use crate::utils::prelude::SrcSpan;
use super::operator::Operator;

/// One side of a split phrase, trimmed, with its byte range in the
/// original phrase. The text may be empty or contain no number words
/// at all; the number parser turns both into 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub text: String,
    pub location: SrcSpan,
}

/// A phrase split around its operator. Built per evaluation call and
/// consumed immediately. `location` covers the matched operator term,
/// or the whole phrase when the midpoint fallback was used.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub operator: Operator,
    pub left: Operand,
    pub right: Operand,
    pub location: SrcSpan,
}

use std::fmt::Display;

/// Arithmetic stays integral except for an inexact quotient.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer {
        value: i64
    },
    Float {
        value: f64,
    },
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer { value } => write!(f, "{value}"),
            Value::Float { value } => write!(f, "{value}"),
        }
    }
}

/// What an evaluation produced. Division by zero is a displayable
/// outcome of its own, not an error: the phrase was understood, the
/// arithmetic just has no answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluated {
    Number {
        value: Value
    },
    DivisionByZero,
}

impl Display for Evaluated {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evaluated::Number { value } => write!(f, "{value}"),
            Evaluated::DivisionByZero => write!(f, "Xato (0 ga bo'linmaydi)"),
        }
    }
}

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Detection order. Add always beats Subtract beats Multiply beats
    /// Divide, no matter where in the phrase the words sit.
    pub const PRIORITY: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide
    ];

    /// Spoken and typed forms that signal this operator. Matched as
    /// plain substrings of the lowercased phrase.
    pub fn terms(&self) -> &'static [&'static str] {
        match self {
            Operator::Add => &["qo'sh", "qosh", "qo'shish", "qoshish", "plus", "va", "+"],
            Operator::Subtract => &["ayir", "ayirish", "minus", "-", "aytib ol", "aytib"],
            Operator::Multiply => &["ko'paytir", "kopaytir", "marta", "barobar", "x", "*"],
            Operator::Divide => &["bo'lish", "bolish", "bo'lin", "bolin", "/", "taqsim", "bo'linadi"],
        }
    }

    // The split lists differ from the detection lists for Subtract and
    // Divide: `aytib ol` is tried before its prefix `aytib`, and the
    // looser `bolin`/`bo'linadi` forms are left out.
    pub fn split_terms(&self) -> &'static [&'static str] {
        match self {
            Operator::Add => &["qo'sh", "qosh", "qo'shish", "qoshish", "plus", "va", "+"],
            Operator::Subtract => &["ayir", "ayirish", "aytib ol", "minus", "-"],
            Operator::Multiply => &["ko'paytir", "kopaytir", "marta", "barobar", "x", "*"],
            Operator::Divide => &["bo'lish", "bolish", "bo'lin", "taqsim", "/"],
        }
    }

    pub fn as_literal(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_literal())
    }
}

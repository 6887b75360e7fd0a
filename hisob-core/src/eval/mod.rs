
pub mod value;

pub mod prelude {
    pub use super::value::*;
    pub use super::{evaluate, evaluate_file, evaluate_phrase};
}

use std::path::PathBuf;
use std::rc::Rc;

use crate::number::prelude::parse_operand;
use crate::operator::prelude::{resolve, Expression, Operator};
use crate::utils::prelude::{
    Error, NullWarningEmitterIO, PhraseWarningEmitter, WarningEmitter, WarningEmitterIO
};

use value::{Evaluated, Value};

/// Evaluates a phrase, discarding warnings.
pub fn evaluate(text: &str) -> Result<Evaluated, Error> {
    evaluate_phrase(text, Rc::new(NullWarningEmitterIO))
}

/// Evaluates a phrase, reporting skipped words and guessed splits to
/// the given emitter.
pub fn evaluate_phrase(
    text: &str,
    warnings: Rc<dyn WarningEmitterIO>,
) -> Result<Evaluated, Error> {
    evaluate_src(PathBuf::new(), text, warnings)
}

/// Evaluates the phrase stored in a file.
pub fn evaluate_file(
    path: PathBuf,
    warnings: Rc<dyn WarningEmitterIO>,
) -> Result<Evaluated, Error> {
    let src = match std::fs::read_to_string(path.clone()) {
        Ok(src) => src,
        Err(err) => {
            let error = Error::StdIo { err: err.kind() };
            return Err(error)
        }
    };

    // trailing newline only; leading bytes stay so spans keep lining up
    evaluate_src(path, src.trim_end(), warnings)
}

fn evaluate_src(
    path: PathBuf,
    src: &str,
    warnings: Rc<dyn WarningEmitterIO>,
) -> Result<Evaluated, Error> {
    let warnings = PhraseWarningEmitter::new(
        path.clone(),
        src.to_string(),
        WarningEmitter::new(warnings)
    );

    let expression = match resolve(src, &warnings) {
        Ok(expression) => expression,
        Err(error) => {
            return Err(Error::Resolve { path, src: src.to_string(), error })
        }
    };

    Ok(eval_expression(&expression, &warnings))
}

/// Parses both operands and applies the operator. An operand with no
/// recognizable number words contributes 0.
pub fn eval_expression(
    expression: &Expression,
    warnings: &PhraseWarningEmitter
) -> Evaluated {
    let a = parse_operand(&expression.left.text, expression.left.location.start, warnings);
    let b = parse_operand(&expression.right.text, expression.right.location.start, warnings);

    let value = match expression.operator {
        Operator::Add => Value::Integer { value: a + b },
        Operator::Subtract => Value::Integer { value: a - b },
        Operator::Multiply => Value::Integer { value: a * b },
        Operator::Divide => {
            if b == 0 {
                return Evaluated::DivisionByZero;
            }

            if a % b == 0 {
                Value::Integer { value: a / b }
            } else {
                Value::Float { value: a as f64 / b as f64 }
            }
        }
    };

    Evaluated::Number { value }
}

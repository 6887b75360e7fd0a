use std::{
    io::{IsTerminal, Write},
    time::Duration,
};
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

use hisob_core::eval::prelude::{Evaluated, Value};

pub(crate) fn print_evaluating(text: &str) {
    print_colourful_prefix("Evaluating", Color::Magenta, text)
}

pub(crate) fn print_evaluated(duration: Duration) {
    print_colourful_prefix("Evaluated", Color::Green, &format!("in {}", seconds(duration)))
}

pub(crate) fn print_running(text: &str) {
    print_colourful_prefix("Running", Color::Green, text)
}

pub fn seconds(duration: Duration) -> String {
    format!("{:.2}s", duration.as_millis() as f32 / 1000.)
}

/// Renders a result for the terminal: integers get space-grouped
/// thousands, quotients within 1e-9 of an integer are shown as that
/// integer, anything else prints as is.
pub(crate) fn format_result(result: &Evaluated) -> String {
    match result {
        Evaluated::Number { value } => format_number(value),
        Evaluated::DivisionByZero => result.to_string(),
    }
}

pub(crate) fn format_number(value: &Value) -> String {
    match value {
        Value::Integer { value } => group_digits(*value),
        Value::Float { value } => {
            if (value - value.round()).abs() < 1e-9 {
                group_digits(value.round() as i64)
            } else {
                value.to_string()
            }
        }
    }
}

fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::from(if value < 0 { "-" } else { "" });
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    grouped
}

pub fn print_colourful_prefix(prefix: &str, color: Color, text: &str) {
    let buffer_writer = stderr_buffer_writer();
    let mut buffer = buffer_writer.buffer();
    buffer
        .set_color(
            ColorSpec::new()
                .set_intense(true)
                .set_bold(true)
                .set_fg(Some(color)),
        )
        .expect("print_colourful_prefix");
    write!(buffer, "{prefix: >11}").expect("print_colourful_prefix");
    buffer
        .set_color(&ColorSpec::new())
        .expect("print_colourful_prefix");
    writeln!(buffer, " {text}").expect("print_colourful_prefix");
    buffer_writer.print(&buffer).expect("print_colourful_prefix");
}

pub fn stderr_buffer_writer() -> BufferWriter {
    BufferWriter::stderr(color_choice())
}

fn colour_forced() -> bool {
    if let Ok(force) = std::env::var("FORCE_COLOR") {
        !force.is_empty()
    } else {
        false
    }
}

fn color_choice() -> ColorChoice {
    if colour_forced() {
        ColorChoice::Always
    } else if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

#[cfg(test)]
mod tests {
    use hisob_core::eval::prelude::{Evaluated, Value};

    use super::{format_number, format_result};

    #[test]
    fn test_grouped_integers() {
        let pairs = vec![
            (0, "0"),
            (5, "5"),
            (999, "999"),
            (1_000, "1 000"),
            (1_500, "1 500"),
            (300_000, "300 000"),
            (1_000_000_000, "1 000 000 000"),
            (-12_345, "-12 345"),
        ];

        for (idx, (value, expected)) in pairs.iter().enumerate() {
            assert_eq!(
                format_number(&Value::Integer { value: *value }), *expected,
                "Formatted number does not match expected text ({value}) at {idx}"
            );
        }
    }

    #[test]
    fn test_near_integer_floats_round() {
        assert_eq!(format_number(&Value::Float { value: 3.0000000001 }), "3");
        assert_eq!(format_number(&Value::Float { value: 1500.0 }), "1 500");
        assert_eq!(format_number(&Value::Float { value: 3.5 }), "3.5");
    }

    #[test]
    fn test_division_by_zero_text() {
        assert_eq!(format_result(&Evaluated::DivisionByZero), "Xato (0 ga bo'linmaydi)");
    }
}

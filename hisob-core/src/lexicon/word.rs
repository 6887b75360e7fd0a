/// Strips `.` `,` `?` `!`, lowercases and collapses the typographic
/// apostrophes `’` and `` ` `` into `'`. Lookup keys in the tables below
/// are stored in exactly this form.
pub fn normalize(word: &str) -> String {
    let normalized = word
        .chars()
        .filter(|ch| !matches!(ch, '.' | ',' | '?' | '!'))
        .flat_map(char::to_lowercase)
        .map(|ch| match ch {
            '’' | '`' => '\'',
            ch => ch
        })
        .collect::<String>();

    normalized.trim().to_string()
}

/// Additive number words, 0 to 90. Spellings without the apostrophe
/// (`tort`, `on`, ...) are common in typed input and map to the same
/// value as their apostrophed form.
pub fn cardinal(word: &str) -> Option<i64> {
	Some(match word {
		"nol" => 0,
		"bir" => 1,
		"ikki" => 2,
		"uch" => 3,
		"to'rt" | "tort" => 4,
		"besh" => 5,
		"olti" => 6,
		"yetti" => 7,
		"sakkiz" => 8,
		"to'qqiz" => 9,

		"o'n" | "on" => 10,
		"yigirma" => 20,
		"o'ttiz" | "ottiz" => 30,
		"qirq" => 40,
		"ellik" => 50,
		"oltmish" => 60,
		"yetmish" => 70,
		"sakson" => 80,
		"to'qson" | "toqson" => 90,

		_ => return None
	})
}

/// Multiplicative scale words.
pub fn magnitude(word: &str) -> Option<i64> {
	Some(match word {
		"yuz" => 100,
		"ming" => 1_000,
		"million" => 1_000_000,
		"milliard" => 1_000_000_000,

		_ => return None
	})
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
	Literal(i64),
	Cardinal(i64),
	Magnitude(i64),
	Unknown,
}

impl std::fmt::Display for WordClass {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			WordClass::Literal(value) => write!(f, "literal {value}"),
			WordClass::Cardinal(value) => write!(f, "cardinal {value}"),
			WordClass::Magnitude(value) => write!(f, "magnitude {value}"),
			WordClass::Unknown => write!(f, "unknown")
		}
	}
}

/// Classifies a normalized word. Digit strings win over the tables so
/// that mixed phrases like `2 ming` keep working.
pub fn classify(word: &str) -> WordClass {
	if let Ok(value) = word.parse::<i64>() {
		return WordClass::Literal(value);
	}

	if let Some(value) = cardinal(word) {
		return WordClass::Cardinal(value);
	}

	if let Some(value) = magnitude(word) {
		return WordClass::Magnitude(value);
	}

	WordClass::Unknown
}

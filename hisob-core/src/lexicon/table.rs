use std::fmt::Display;

use crate::utils::prelude::SrcSpan;
use super::scanner::scan_words;
use super::word::{classify, normalize, WordClass};

/// One row of the word listing the CLI can print next to a result.
#[derive(Debug, Clone)]
pub struct TableEntry {
	pub location: SrcSpan,
	pub word: String,
	pub class: WordClass
}

impl TableEntry {
	pub fn from(location: SrcSpan, word: String, class: WordClass) -> Self {
		Self {
			location,
			word,
			class
		}
	}
}

impl Display for TableEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}] {}: {}", self.location, self.word, self.class)
	}
}

/// Classifies every word of the phrase without evaluating anything.
pub fn word_listing(text: &str) -> Vec<TableEntry> {
	scan_words(text, 0)
		.map(|(start, word, end)| {
			let class = classify(&normalize(&word));

			TableEntry::from(SrcSpan::from(start, end), word, class)
		})
		.collect()
}

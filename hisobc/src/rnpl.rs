use std::io::Write;

use hisob_core::lexicon::prelude::{classify, normalize, scan_words};
use hisob_core::number::prelude::parse_number;

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			return Ok(());
		}

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		match input.as_str() {
			"" => {},
			".exit" => return Ok(()),
			_ => {
				for (start, word, end) in scan_words(&input, 0) {
					println!("[{start}..{end}] {:?}", classify(&normalize(&word)));
				}

				println!("= {}", parse_number(&input));
			}
		}
	}
}

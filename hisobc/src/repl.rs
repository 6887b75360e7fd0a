use std::io::{ErrorKind, Write};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hisob_core::eval::prelude::evaluate_phrase;

use crate::cli::format_result;
use crate::ConsoleWarningEmitter;

const PROMPT: &str = ">> ";

/// One read line stands in for one recognition result. Ctrl-C plays
/// the mic toggle: Listening -> Idle, then the loop winds down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListenState {
	Idle,
	Listening,
}

pub fn start() -> std::io::Result<()> {
	let listening = Arc::new(AtomicBool::new(true));

	{
		let listening = listening.clone();
		ctrlc::set_handler(move || listening.store(false, Ordering::SeqCst))
			.expect("Setting Ctrl-C handler");
	}

	let stdin = std::io::stdin();

	loop {
		if state(&listening) == ListenState::Idle {
			println!();
			return Ok(());
		}

		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;

		match stdin.read_line(&mut input) {
			Ok(0) => return Ok(()),
			Ok(_) => {},
			Err(err) if err.kind() == ErrorKind::Interrupted => continue,
			Err(err) => return Err(err)
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
				match evaluate_phrase(&input, Rc::new(ConsoleWarningEmitter)) {
					Ok(result) => {
						println!("{}", format_result(&result));
					},
					Err(err) => {
						let buf_writer = crate::cli::stderr_buffer_writer();
						let mut buf = buf_writer.buffer();

						err.pretty(&mut buf);
						buf_writer
							.print(&buf)
							.expect("Writing error to stderr");
					}
				}
			}
		}
	}
}

fn state(listening: &AtomicBool) -> ListenState {
	if listening.load(Ordering::SeqCst) {
		ListenState::Listening
	} else {
		ListenState::Idle
	}
}

mod cli;
mod repl;
mod rnpl;

use std::{path::PathBuf, rc::Rc};

use clap::Parser;
use cli::{
    format_result, print_evaluated, print_evaluating, print_running
};
use hisob_core::{
    eval::prelude::{evaluate_file, evaluate_phrase},
    lexicon::prelude::word_listing,
    utils::prelude::{Warning, WarningEmitterIO}
};

#[derive(Parser)]
enum Command {
    /// Evaluates a spoken arithmetic phrase
    Eval {
        /// The phrase, e.g. "ikki qo'sh uch"
        phrase: String,
        /// Print how every word was classified
        #[arg(short, long, default_value_t = false)]
        show_words: bool
    },
    /// Evaluates a phrase read from a file
    Run {
        /// Path of phrase file
        path: PathBuf
    },
    /// Runs Read Eval Print Loop
    Repl,
    /// Runs Read Number Print Loop
    Rnpl
}

fn main() {
    let _ = match Command::parse() {
        Command::Eval { phrase, show_words } => {
            let warning_emitter = Rc::new(ConsoleWarningEmitter);

            let buf_writer = crate::cli::stderr_buffer_writer();
            let mut buf = buf_writer.buffer();

            print_evaluating(&phrase);
            let start = std::time::Instant::now();

            if show_words {
                for entry in word_listing(&phrase) {
                    println!("{entry}");
                }
            }

            match evaluate_phrase(&phrase, warning_emitter.clone()) {
                Ok(result) => {
                    println!("{}", format_result(&result));
                },
                Err(err) => {
                    err.pretty(&mut buf);
                    buf_writer
                        .print(&buf)
                        .expect("Writing error to stderr");
                }
            };

            print_evaluated(std::time::Instant::now() - start);
        },
        Command::Run { path } => {
            let warning_emitter = Rc::new(ConsoleWarningEmitter);

            let buf_writer = crate::cli::stderr_buffer_writer();
            let mut buf = buf_writer.buffer();

            print_running(path.to_str().unwrap_or_default());
            let start = std::time::Instant::now();

            match evaluate_file(path, warning_emitter.clone()) {
                Ok(result) => {
                    println!("{}", format_result(&result));
                },
                Err(err) => {
                    err.pretty(&mut buf);
                    buf_writer
                        .print(&buf)
                        .expect("Writing error to stderr");
                }
            };

            print_evaluated(std::time::Instant::now() - start);
        },
        Command::Repl => {
            let _ = repl::start();
        },
        Command::Rnpl => {
            let _ = rnpl::start();
        }
    };
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleWarningEmitter;

impl WarningEmitterIO for ConsoleWarningEmitter {
    fn emit_warning(&self, warning: Warning) {
        let buffer_writer = crate::cli::stderr_buffer_writer();
        let mut buffer = buffer_writer.buffer();
        warning.pretty(&mut buffer);
        buffer_writer
            .print(&buffer)
            .expect("Writing warning to stderr");
    }
}

//! Flashcards in the terminal!
//! Add term/definition pairs, quiz yourself on them and keep track of the
//! cards you get wrong.
pub mod cli;
pub mod console;
pub mod deck;
pub mod error;
pub mod mistakes;
pub mod session;
pub mod transfer;

use crate::cli::Args;
use crate::console::{Console, LineSource, Lines, Readline};
use crate::error::{Result, SessionError};
use crate::session::Session;
use std::io::{self, IsTerminal, Write};

/// Run one session on the given input and output.
///
/// Cards from `--import_from` are loaded before the first prompt, and
/// `--export_to` is written once the session ends. An interrupt ends the
/// session on the spot: no goodbye, no export.
pub fn play<S: LineSource, W: Write>(args: Args, source: S, out: W) -> Result<()> {
    let mut session = Session::new(Console::new(source, out), args.export_to);
    let res = match args.import_from {
        Some(path) => session.import(path).and_then(|_| session.run()),
        None => session.run(),
    };
    match res {
        Err(SessionError::Interrupted) => {
            log::debug!("interrupted");
            Ok(())
        }
        res => res,
    }
}

/// Run a session on stdin and stdout, with line editing when stdin is a
/// terminal.
pub fn repl(args: Args) -> Result<()> {
    let stdout = io::stdout();
    if io::stdin().is_terminal() {
        play(args, Readline::new()?, stdout)
    } else {
        play(args, Lines(io::stdin().lock()), stdout)
    }
}

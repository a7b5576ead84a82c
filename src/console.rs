//! Console I/O that keeps a transcript of the conversation.
use crate::error::{Result, SessionError};
use rustyline::DefaultEditor;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

/// Where user input comes from.
pub trait LineSource {
    /// Next line without its line terminator. End of input is
    /// [`SessionError::InputClosed`], `ctrl+c` is [`SessionError::Interrupted`].
    fn read_line(&mut self) -> Result<String>;
}

/// Plain lines from any reader, used when stdin is not a terminal.
pub struct Lines<R>(pub R);

impl<R: BufRead> LineSource for Lines<R> {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.0.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Line editing and history for interactive terminals.
pub struct Readline(DefaultEditor);

impl Readline {
    pub fn new() -> Result<Self> {
        Ok(Self(DefaultEditor::new()?))
    }
}

impl LineSource for Readline {
    fn read_line(&mut self) -> Result<String> {
        let line = self.0.readline("")?;
        if !line.trim().is_empty() {
            let _ = self.0.add_history_entry(line.as_str());
        }
        Ok(line)
    }
}

/// Wraps the input source and the output sink, recording every logged
/// message and every line read.
pub struct Console<S, W> {
    source: S,
    out: W,
    transcript: Vec<String>,
}

impl<S: LineSource, W: Write> Console<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self {
            source,
            out,
            transcript: Vec::new(),
        }
    }

    /// Print `message` on its own line and log it.
    pub fn say(&mut self, message: &str) -> Result<()> {
        self.say_with(message, "\n")
    }

    /// Print `message` followed by `end` and log both.
    pub fn say_with(&mut self, message: &str, end: &str) -> Result<()> {
        let text = format!("{message}{end}");
        self.emit(&text)?;
        self.transcript.push(text);
        Ok(())
    }

    /// Print `message` on its own line without logging it.
    pub fn say_unlogged(&mut self, message: &str) -> Result<()> {
        self.emit(&format!("{message}\n"))
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Read one line of input and log it.
    pub fn read(&mut self) -> Result<String> {
        let line = self.source.read_line()?;
        self.transcript.push(format!("{line}\n"));
        Ok(line)
    }

    /// Print `prompt`, then read the answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        self.read()
    }

    #[cfg(test)]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Write the transcript to `path`, replacing its content.
    pub fn save_transcript(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for entry in &self.transcript {
            writer.write_all(entry.as_bytes())?;
        }
        writer.flush()
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }
}

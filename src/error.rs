//! Errors that end a session.
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// stdin reached its end, or the user pressed `ctrl+d`
    #[error("input closed")]
    InputClosed,
    /// `ctrl+c` at a terminal prompt
    #[error("interrupted")]
    Interrupted,
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read line: {0}")]
    Readline(ReadlineError),
}

impl From<ReadlineError> for SessionError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Eof => SessionError::InputClosed,
            ReadlineError::Interrupted => SessionError::Interrupted,
            ReadlineError::Io(err) => SessionError::Io(err),
            err => SessionError::Readline(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// A menu entry that doesn't exist.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("{0} is not an option")]
pub struct NotAnOption(pub String);

#[cfg(test)]
mod test {
    use super::SessionError;
    use rustyline::error::ReadlineError;

    #[test]
    fn readline_end_and_interrupt() {
        assert!(matches!(
            SessionError::from(ReadlineError::Eof),
            SessionError::InputClosed
        ));
        assert!(matches!(
            SessionError::from(ReadlineError::Interrupted),
            SessionError::Interrupted
        ));
    }
}

//! Command-line arguments.
use clap::Parser;
use std::path::PathBuf;

/// Memorize term/definition pairs in the terminal.
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// Load cards from this file before the first prompt
    #[arg(long = "import_from", value_name = "FILE")]
    pub import_from: Option<PathBuf>,

    /// Append all cards to this file on exit
    #[arg(long = "export_to", value_name = "FILE")]
    pub export_to: Option<PathBuf>,
}

#[cfg(test)]
mod test {
    use super::Args;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parse_underscore_flags() {
        let args =
            Args::try_parse_from(["flashcards", "--import_from", "in.txt", "--export_to", "out.txt"])
                .unwrap();
        assert_eq!(args.import_from, Some(PathBuf::from("in.txt")));
        assert_eq!(args.export_to, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::try_parse_from(["flashcards"]).unwrap();
        assert!(args.import_from.is_none());
        assert!(args.export_to.is_none());
    }
}

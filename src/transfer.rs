//! Import and export of card files.
//!
//! One card per line, written as `term:definition`. Nothing is escaped, so a
//! term must not contain a colon and neither side may contain a newline.
use crate::deck::{Card, Deck};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Split a line on its first colon.
pub fn parse_line(line: &str) -> Option<Card> {
    let (term, definition) = line.trim().split_once(':')?;
    Some(Card::new(term, definition))
}

/// Read every card of `path`.
///
/// Blank lines and lines without a colon are skipped.
pub fn read_cards(path: impl AsRef<Path>) -> io::Result<Vec<Card>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut cards = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(card) = parse_line(&line) else {
            log::warn!("{}:{}: no colon in {line:?}, skipped", path.display(), n + 1);
            continue;
        };
        cards.push(card);
    }
    Ok(cards)
}

/// Load every card of `path` into `deck`, overwriting cards with the same term.
///
/// The deck is only touched once the whole file has been read. Returns the
/// number of cards loaded.
pub fn import(deck: &mut Deck, path: impl AsRef<Path>) -> io::Result<usize> {
    let path = path.as_ref();
    let cards = read_cards(path)?;
    let loaded = cards.len();
    for card in cards {
        deck.replace(card);
    }
    log::info!("imported {loaded} cards from {}", path.display());
    Ok(loaded)
}

/// Append every card of `deck` to `path`, creating the file if needed.
///
/// Returns the number of cards saved.
pub fn export(deck: &Deck, path: impl AsRef<Path>) -> io::Result<usize> {
    let path = path.as_ref();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    for card in deck.iter() {
        writeln!(writer, "{}:{}", card.term, card.definition)?;
    }
    writer.flush()?;
    log::info!("exported {} cards to {}", deck.len(), path.display());
    Ok(deck.len())
}

#[cfg(test)]
mod test {
    use super::{export, import, parse_line};
    use crate::deck::{Card, Deck};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parse_splits_on_first_colon() {
        assert_eq!(
            parse_line("time:12:30\n"),
            Some(Card::new("time", "12:30"))
        );
        assert_eq!(parse_line("no colon"), None);
    }

    #[test]
    fn import_overwrites_existing_terms() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.txt");
        fs::write(&path, "capital:Rome\nlanguage:Italian\n\nbroken line\n").unwrap();

        let mut deck = Deck::default();
        deck.insert(Card::new("capital", "Paris"));
        deck.insert(Card::new("currency", "Euro"));

        assert_eq!(import(&mut deck, &path).unwrap(), 2);
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.definition_of("capital"), Some("Rome"));
        let terms: Vec<_> = deck.iter().map(|c| c.term.as_str()).collect();
        assert_eq!(terms, ["currency", "capital", "language"]);
    }

    #[test]
    fn import_stops_before_touching_deck_on_bad_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.txt");
        fs::write(&path, b"capital:Paris\nbad:\xff\xfe\n").unwrap();
        let mut deck = Deck::default();
        let err = import(&mut deck, &path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        assert!(deck.is_empty());
    }

    #[test]
    fn import_missing_file() {
        let dir = tempdir().unwrap();
        let mut deck = Deck::default();
        let err = import(&mut deck, dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(deck.is_empty());
    }

    #[test]
    fn export_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.txt");
        let mut deck = Deck::default();
        deck.insert(Card::new("capital", "Paris"));
        deck.insert(Card::new("currency", "Euro"));

        assert_eq!(export(&deck, &path).unwrap(), 2);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "capital:Paris\ncurrency:Euro\n"
        );

        export(&deck, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 4);
    }
}

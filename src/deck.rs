//! The in-memory card store.

/// A term and its definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub term: String,
    pub definition: String,
}

impl Card {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Cards in insertion order.
///
/// Terms are unique. Definitions are unique only as long as cards come in
/// through [`Deck::insert`] after checking [`Deck::has_definition`];
/// [`Deck::replace`] skips that check.
#[derive(Default, Debug)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn has_term(&self, term: &str) -> bool {
        self.0.iter().any(|c| c.term == term)
    }

    pub fn has_definition(&self, definition: &str) -> bool {
        self.0.iter().any(|c| c.definition == definition)
    }

    #[cfg(test)]
    pub fn definition_of(&self, term: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|c| c.term == term)
            .map(|c| c.definition.as_str())
    }

    /// Terms whose definition is `definition`.
    pub fn terms_defined_as<'a>(&'a self, definition: &'a str) -> impl Iterator<Item = &'a str> {
        self.0
            .iter()
            .filter(move |c| c.definition == definition)
            .map(|c| c.term.as_str())
    }

    /// Append a card whose term is not in the deck yet.
    ///
    /// Returns `false` and leaves the deck untouched if the term is taken.
    pub fn insert(&mut self, card: Card) -> bool {
        if self.has_term(&card.term) {
            return false;
        }
        self.0.push(card);
        true
    }

    /// Drop any card with the same term, then append `card`.
    pub fn replace(&mut self, card: Card) {
        self.remove(&card.term);
        self.0.push(card);
    }

    pub fn remove(&mut self, term: &str) -> Option<Card> {
        let pos = self.0.iter().position(|c| c.term == term)?;
        Some(self.0.remove(pos))
    }
}

#[cfg(test)]
mod test {
    use super::{Card, Deck};

    fn deck() -> Deck {
        let mut deck = Deck::default();
        deck.insert(Card::new("capital", "Paris"));
        deck.insert(Card::new("currency", "Euro"));
        deck
    }

    #[test]
    fn insert_rejects_taken_term() {
        let mut deck = deck();
        assert!(!deck.insert(Card::new("capital", "Berlin")));
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.definition_of("capital"), Some("Paris"));
    }

    #[test]
    fn replace_moves_term_to_the_end() {
        let mut deck = deck();
        deck.replace(Card::new("capital", "Rome"));
        let terms: Vec<_> = deck.iter().map(|c| c.term.as_str()).collect();
        assert_eq!(terms, ["currency", "capital"]);
        assert_eq!(deck.definition_of("capital"), Some("Rome"));
    }

    #[test]
    fn replace_allows_duplicate_definitions() {
        let mut deck = deck();
        deck.replace(Card::new("money", "Euro"));
        assert_eq!(deck.len(), 3);
        let terms: Vec<_> = deck.terms_defined_as("Euro").collect();
        assert_eq!(terms, ["currency", "money"]);
    }

    #[test]
    fn remove_missing_term() {
        let mut deck = deck();
        assert_eq!(deck.remove("language"), None);
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.remove("capital"), Some(Card::new("capital", "Paris")));
        assert_eq!(deck.len(), 1);
    }
}

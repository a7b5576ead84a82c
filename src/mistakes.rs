//! Wrong-answer statistics.
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;

/// Number of wrong answers per term. Terms never answered wrongly are absent.
#[derive(Default, Debug)]
pub struct Mistakes(BTreeMap<String, u32>);

/// The terms answered wrongly most often.
#[derive(Debug, PartialEq, Eq)]
pub enum Hardest {
    NoErrors,
    One { term: String, errors: u32 },
    Many { terms: Vec<String>, errors: u32 },
}

impl Mistakes {
    pub fn record(&mut self, term: &str) {
        *self.0.entry(term.to_owned()).or_insert(0) += 1;
    }

    #[cfg(test)]
    pub fn count(&self, term: &str) -> u32 {
        self.0.get(term).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn reset(&mut self) {
        self.0.clear();
    }

    /// Every term tied at the maximum count, in sorted order.
    pub fn hardest(&self) -> Hardest {
        let Some(&errors) = self.0.values().max() else {
            return Hardest::NoErrors;
        };
        let mut terms: Vec<String> = self
            .0
            .iter()
            .filter(|&(_, &n)| n == errors)
            .map(|(t, _)| t.to_owned())
            .collect();
        if terms.len() == 1 {
            Hardest::One {
                term: terms.remove(0),
                errors,
            }
        } else {
            Hardest::Many { terms, errors }
        }
    }
}

impl fmt::Display for Hardest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hardest::NoErrors => write!(f, "There are no cards with errors."),
            Hardest::One { term, errors } => write!(
                f,
                "The hardest card is \"{term}\". You have {errors} errors answering it."
            ),
            Hardest::Many { terms, errors } => write!(
                f,
                "The hardest cards are {}. You have {errors} errors answering them.",
                terms.iter().map(|t| format!("\"{t}\"")).join(", ")
            ),
        }
    }
}

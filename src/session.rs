//! The menu loop and its actions.
use crate::console::{Console, LineSource};
use crate::deck::{Card, Deck};
use crate::error::{NotAnOption, Result, SessionError};
use crate::mistakes::Mistakes;
use crate::transfer;
use itertools::Itertools;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const MENU: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl FromStr for Action {
    type Err = NotAnOption;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "add" => Ok(Action::Add),
            "remove" => Ok(Action::Remove),
            "import" => Ok(Action::Import),
            "export" => Ok(Action::Export),
            "ask" => Ok(Action::Ask),
            "exit" => Ok(Action::Exit),
            "log" => Ok(Action::Log),
            "hardest card" => Ok(Action::HardestCard),
            "reset stats" => Ok(Action::ResetStats),
            _ => Err(NotAnOption(s.to_owned())),
        }
    }
}

/// Everything one run of the program owns.
pub struct Session<S, W> {
    console: Console<S, W>,
    deck: Deck,
    mistakes: Mistakes,
    /// saved to on exit
    export_to: Option<PathBuf>,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub fn new(console: Console<S, W>, export_to: Option<PathBuf>) -> Self {
        Self {
            console,
            deck: Deck::default(),
            mistakes: Mistakes::default(),
            export_to,
        }
    }

    #[cfg(test)]
    fn deck(&self) -> &Deck {
        &self.deck
    }

    #[cfg(test)]
    fn mistakes(&self) -> &Mistakes {
        &self.mistakes
    }

    #[cfg(test)]
    fn console(&self) -> &Console<S, W> {
        &self.console
    }

    #[cfg(test)]
    fn into_console(self) -> Console<S, W> {
        self.console
    }

    /// Serve menu actions until `exit` or the end of input.
    pub fn run(&mut self) -> Result<()> {
        match self.serve() {
            Err(SessionError::InputClosed) => {
                log::debug!("input closed, exiting");
                self.exit()
            }
            res => res,
        }
    }

    fn serve(&mut self) -> Result<()> {
        loop {
            let input = self.console.ask(MENU)?;
            if input.is_empty() {
                continue;
            }
            let action = match input.parse::<Action>() {
                Ok(action) => action,
                Err(err) => {
                    self.console.say(&err.to_string())?;
                    continue;
                }
            };
            log::debug!("dispatching {action:?}");
            match action {
                Action::Add => self.add()?,
                Action::Remove => self.remove()?,
                Action::Import => {
                    self.console.say_with("File name:", "\n\n")?;
                    let path = self.console.read()?;
                    self.import(path)?;
                }
                Action::Export => {
                    let path = self.console.ask("File name:")?;
                    self.export(path)?;
                }
                Action::Ask => self.practice()?,
                Action::Log => self.save_log()?,
                Action::HardestCard => {
                    let hardest = self.mistakes.hardest();
                    self.console.say(&hardest.to_string())?;
                }
                Action::ResetStats => {
                    self.mistakes.reset();
                    self.console.say("Card statistics have been reset.")?;
                }
                Action::Exit => return self.exit(),
            }
        }
    }

    fn exit(&mut self) -> Result<()> {
        self.console.say_unlogged("Bye bye!")?;
        if let Some(path) = self.export_to.take() {
            self.export(path)?;
        }
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let mut term = self.console.ask("The card:")?;
        while self.deck.has_term(&term) {
            term = self
                .console
                .ask(&format!("The card \"{term}\" already exists. Try again:"))?;
        }
        let mut definition = self.console.ask("The definition of the card:")?;
        while self.deck.has_definition(&definition) {
            definition = self.console.ask(&format!(
                "The definition \"{definition}\" already exists. Try again:"
            ))?;
        }
        let message = format!("The pair (\"{term}\":\"{definition}\") has been added.");
        self.deck.insert(Card::new(term, definition));
        self.console.say(&message)
    }

    fn remove(&mut self) -> Result<()> {
        let term = self.console.ask("Which card?")?;
        match self.deck.remove(&term) {
            Some(_) => self.console.say("The card has been removed."),
            None => self
                .console
                .say(&format!("Can't remove \"{term}\": there is no such card.")),
        }
    }

    /// Load cards from `path`. A missing file is reported, never fatal.
    pub fn import(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match transfer::import(&mut self.deck, path) {
            Ok(loaded) => self
                .console
                .say_with(&format!("{loaded} cards have been loaded."), "\n\n"),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::warn!("can't import {}: {err}", path.display());
                self.console.say("File not found.")
            }
            Err(err) => {
                log::warn!("can't import {}: {err}", path.display());
                self.console
                    .say(&format!("Can't read \"{}\".", path.display()))
            }
        }
    }

    /// Append every card to `path`.
    pub fn export(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match transfer::export(&self.deck, path) {
            Ok(saved) => self
                .console
                .say(&format!("{saved} cards have been saved.")),
            Err(err) => {
                log::warn!("can't export to {}: {err}", path.display());
                self.console
                    .say(&format!("Can't write \"{}\".", path.display()))
            }
        }
    }

    fn practice(&mut self) -> Result<()> {
        let questions = loop {
            let input = self.console.ask("How many times to ask?")?;
            match input.trim().parse::<usize>() {
                Ok(n) => break n,
                Err(_) => self.console.say(&format!("{input} is not a number"))?,
            }
        };
        if questions == 0 {
            return Ok(());
        }
        if self.deck.is_empty() {
            return self.console.say("There are no cards to ask.");
        }
        let cards = self.deck.cards().to_vec();
        for card in cards.iter().cycle().take(questions) {
            self.quiz(card)?;
        }
        Ok(())
    }

    fn quiz(&mut self, card: &Card) -> Result<()> {
        let answer = self
            .console
            .ask(&format!("Print the definition of \"{}\":", card.term))?;
        if answer == card.definition {
            return self.console.say_unlogged("Correct!");
        }
        let others = self
            .deck
            .terms_defined_as(&answer)
            .sorted()
            .map(|t| format!("\"{t}\""))
            .join(", ");
        let message = if others.is_empty() {
            format!("Wrong. The right answer is \"{}\".", card.definition)
        } else {
            format!(
                "Wrong. The right answer is \"{}\", but your definition is correct for {others}.",
                card.definition
            )
        };
        self.mistakes.record(&card.term);
        self.console.say(&message)
    }

    fn save_log(&mut self) -> Result<()> {
        self.console.say_with("File name:", "\n\n")?;
        let path = self.console.read()?;
        match self.console.save_transcript(&path) {
            Ok(()) => self.console.say_with("The log has been saved.", "\n\n"),
            Err(err) => {
                log::warn!("can't save log to {path}: {err}");
                self.console.say(&format!("Can't write \"{path}\"."))
            }
        }
    }
}

//! Interactive session loop.
//! Reads one command per line, runs the matching deck operation and prompts again until `exit`.

pub mod command;
pub mod console;
pub mod transcript;

pub use command::Command;
pub use console::Console;
pub use transcript::Transcript;

use crate::error::{PersistError, SessionError, SessionResult};
use crate::export::json::{export_json_to_path, import_json};
use crate::models::quiz::{grade, pick_card};
use crate::models::{Deck, Hardest, Verdict};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const MENU: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// Files given at launch.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Imported once before the first prompt.
    pub import_from: Option<PathBuf>,
    /// Exported to when the user exits.
    pub export_to: Option<PathBuf>,
}

pub struct Session<R, W> {
    deck: Deck,
    console: Console<R, W>,
    config: SessionConfig,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            deck: Deck::default(),
            console: Console::new(input, output),
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn transcript(&self) -> &Transcript {
        self.console.transcript()
    }

    pub fn output(&self) -> &W {
        self.console.output()
    }

    /// Runs until the user exits. Fatal persistence errors end the loop early.
    pub fn run(&mut self) -> SessionResult<()> {
        if let Some(path) = self.config.import_from.clone() {
            self.import(Some(&path))?;
        }

        loop {
            let input = self.console.prompt(MENU)?;
            match Command::parse(&input) {
                Some(Command::Exit) => {
                    if let Some(path) = self.config.export_to.clone() {
                        self.export(Some(&path))?;
                    }
                    self.console.say("Bye bye!")?;
                    return Ok(());
                }
                Some(command) => self.dispatch(command)?,
                None => {
                    log::warn!("unknown command {:?}", input);
                    self.console.say("That is not a valid option!")?;
                }
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> SessionResult<()> {
        log::debug!("dispatching {:?}", command);
        match command {
            Command::Add => self.add(),
            Command::Remove => self.remove(),
            Command::Import => self.import(None),
            Command::Export => self.export(None),
            Command::Ask => self.ask(),
            Command::Log => self.log(),
            Command::HardestCard => self.hardest_card(),
            Command::ResetStats => self.reset_stats(),
            Command::Exit => Ok(()),
        }
    }

    /// Prompts until both the term and the definition are new to the deck.
    pub fn add(&mut self) -> SessionResult<()> {
        let mut front = self.console.prompt("The card:")?;
        while self.deck.contains_term(&front) {
            front = self
                .console
                .prompt(&format!("The term \"{}\" already exists. Try again:", front))?;
        }

        let mut back = self.console.prompt("The definition of the card:")?;
        while self.deck.contains_definition(&back) {
            back = self.console.prompt(&format!(
                "The definition \"{}\" already exists. Try again:",
                back
            ))?;
        }

        // The retry loops above already rule out duplicates.
        let card = self.deck.add(&front, &back)?;
        let message = format!(
            "The pair (\"{}\":\"{}\") has been added.",
            card.front, card.back
        );
        self.console.say(&message)
    }

    pub fn remove(&mut self) -> SessionResult<()> {
        let front = self.console.prompt("Which card?")?;
        match self.deck.remove(&front) {
            Some(_) => self.console.say("The card has been removed."),
            None => self
                .console
                .say(&format!("Can't remove \"{}\": there is no such card.", front)),
        }
    }

    /// Replaces the deck with the content of `path`, asking for a file name when none is given.
    pub fn import(&mut self, path: Option<&Path>) -> SessionResult<()> {
        let path = self.resolve_path(path)?;
        match import_json(&path) {
            Ok(deck) => {
                self.deck.replace(deck);
                let message = format!("{} cards have been loaded.", self.deck.len());
                self.console.say(&message)
            }
            Err(PersistError::NotFound { path, source }) => {
                log::warn!("cannot import {}: {}", path.display(), source);
                self.console.say("File not found.")
            }
            Err(e) => {
                log::error!("import failed: {}", e);
                Err(e.into())
            }
        }
    }

    pub fn export(&mut self, path: Option<&Path>) -> SessionResult<()> {
        let path = self.resolve_path(path)?;
        if let Err(e) = export_json_to_path(&self.deck, &path) {
            log::error!("export failed: {}", e);
            return Err(e.into());
        }
        let message = format!("{} cards have been saved.", self.deck.len());
        self.console.say(&message)
    }

    pub fn ask(&mut self) -> SessionResult<()> {
        let input = self.console.prompt("How many times to ask?")?;
        let Ok(rounds) = input.parse::<u32>() else {
            return self
                .console
                .say(&format!("\"{}\" is not a valid number.", input));
        };
        if self.deck.is_empty() {
            return self.console.say("There are no cards to ask.");
        }

        for _ in 0..rounds {
            let Some(index) = pick_card(&self.deck, &mut self.rng) else {
                break;
            };
            let Some(card) = self.deck.get(index) else {
                break;
            };
            let question = format!("Print the definition of \"{}\":", card.front);
            let answer = self.console.prompt(&question)?;

            let message = match grade(&mut self.deck, index, &answer) {
                Some(Verdict::Correct) => "Correct!".to_string(),
                Some(Verdict::Wrong { expected }) => {
                    format!("Wrong. The right answer is \"{}\".", expected)
                }
                Some(Verdict::WrongOtherCard {
                    expected,
                    matching_term,
                }) => format!(
                    "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
                    expected, matching_term
                ),
                None => continue,
            };
            self.console.say(&message)?;
        }
        Ok(())
    }

    /// Saves the transcript, including the prompt for the file name and the answer.
    pub fn log(&mut self) -> SessionResult<()> {
        let path = PathBuf::from(self.console.prompt("File name:")?);
        self.console
            .transcript()
            .save_to(&path)
            .map_err(|source| SessionError::Transcript {
                path: path.clone(),
                source,
            })?;
        self.console.say("The log has been saved.")
    }

    pub fn hardest_card(&mut self) -> SessionResult<()> {
        let message = match self.deck.hardest() {
            Hardest::NoErrors => "There are no cards with errors.".to_string(),
            Hardest::Single(card) => format!(
                "The hardest card is \"{}\". You have {} errors answering it.",
                card.front, card.wrong_count
            ),
            Hardest::Tied(cards) => {
                let terms: Vec<String> =
                    cards.iter().map(|c| format!("\"{}\"", c.front)).collect();
                format!("The hardest cards are {}.", terms.join(", "))
            }
        };
        self.console.say(&message)
    }

    pub fn reset_stats(&mut self) -> SessionResult<()> {
        self.deck.reset_stats();
        self.console.say("Card statistics have been reset.")
    }

    fn resolve_path(&mut self, path: Option<&Path>) -> SessionResult<PathBuf> {
        match path {
            Some(path) if !path.as_os_str().is_empty() => Ok(path.to_path_buf()),
            _ => Ok(PathBuf::from(self.console.prompt("File name:")?)),
        }
    }
}

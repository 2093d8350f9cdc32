//! Deck is an ordered set of flashcards.
//!
//! Terms are unique within a deck and so are definitions. Insertion order is kept
//! and drives the order of serialization and of the hardest-card listing.
use super::Flashcard;
use crate::error::DeckError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    pub flashcards: Vec<Flashcard>,
}

/// Result of the hardest-card query.
#[derive(Debug, PartialEq, Eq)]
pub enum Hardest<'a> {
    NoErrors,
    Single(&'a Flashcard),
    Tied(Vec<&'a Flashcard>),
}

impl Deck {
    pub fn new(flashcards: Vec<Flashcard>) -> Self {
        Self { flashcards }
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.flashcards.get(index)
    }

    pub fn contains_term(&self, front: &str) -> bool {
        self.flashcards.iter().any(|c| c.front == front)
    }

    pub fn contains_definition(&self, back: &str) -> bool {
        self.flashcards.iter().any(|c| c.back == back)
    }

    /// Appends a card with a fresh error counter.
    pub fn add(&mut self, front: &str, back: &str) -> Result<&Flashcard, DeckError> {
        if self.contains_term(front) {
            return Err(DeckError::DuplicateTerm(front.to_string()));
        }
        if self.contains_definition(back) {
            return Err(DeckError::DuplicateDefinition(back.to_string()));
        }
        self.flashcards.push(Flashcard::new(front, back));
        log::debug!("added card {:?} ({} cards)", front, self.len());
        Ok(&self.flashcards[self.flashcards.len() - 1])
    }

    /// Removes the first card with the given term, keeping the order of the rest.
    pub fn remove(&mut self, front: &str) -> Option<Flashcard> {
        let index = self.flashcards.iter().position(|c| c.front == front)?;
        log::debug!("removing card {:?} at {}", front, index);
        Some(self.flashcards.remove(index))
    }

    /// Replaces the whole content of the deck.
    pub fn replace(&mut self, other: Deck) {
        self.flashcards = other.flashcards;
    }

    pub fn reset_stats(&mut self) {
        for card in &mut self.flashcards {
            card.wrong_count = 0;
        }
    }

    /// Bumps the error counter of the card at `index`.
    pub fn record_wrong(&mut self, index: usize) {
        if let Some(card) = self.flashcards.get_mut(index) {
            card.wrong_count += 1;
        }
    }

    /// First card other than `skip` whose definition equals `back`.
    pub fn find_by_definition_except(&self, back: &str, skip: usize) -> Option<&Flashcard> {
        self.flashcards
            .iter()
            .enumerate()
            .find(|(i, c)| *i != skip && c.back == back)
            .map(|(_, c)| c)
    }

    pub fn hardest(&self) -> Hardest<'_> {
        let max = self
            .flashcards
            .iter()
            .map(|c| c.wrong_count)
            .max()
            .unwrap_or(0);
        if max == 0 {
            return Hardest::NoErrors;
        }

        let mut tied: Vec<&Flashcard> = self
            .flashcards
            .iter()
            .filter(|c| c.wrong_count == max)
            .collect();
        if tied.len() == 1 {
            Hardest::Single(tied.remove(0))
        } else {
            Hardest::Tied(tied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_deck() -> Deck {
        Deck::new(vec![
            Flashcard::new("dog", "chien"),
            Flashcard::new("cat", "chat"),
            Flashcard::new("bird", "oiseau"),
        ])
    }

    #[test]
    fn test_add_appends_with_zero_errors() {
        let mut deck = create_test_deck();
        deck.add("fish", "poisson").unwrap();

        assert_eq!(deck.len(), 4);
        assert_eq!(deck.flashcards[3], Flashcard::new("fish", "poisson"));
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut deck = create_test_deck();

        assert_eq!(
            deck.add("dog", "toutou"),
            Err(DeckError::DuplicateTerm("dog".to_string()))
        );
        assert_eq!(
            deck.add("kitten", "chat"),
            Err(DeckError::DuplicateDefinition("chat".to_string()))
        );
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut deck = create_test_deck();
        let removed = deck.remove("cat").unwrap();

        assert_eq!(removed.back, "chat");
        let fronts: Vec<_> = deck.flashcards.iter().map(|c| c.front.as_str()).collect();
        assert_eq!(fronts, ["dog", "bird"]);
    }

    #[test]
    fn test_remove_missing_leaves_deck_unchanged() {
        let mut deck = create_test_deck();
        assert!(deck.remove("horse").is_none());
        assert_eq!(deck, create_test_deck());
    }

    #[test]
    fn test_reset_stats_is_idempotent() {
        let mut deck = create_test_deck();
        deck.record_wrong(0);
        deck.record_wrong(2);
        deck.record_wrong(2);

        deck.reset_stats();
        let once = deck.clone();
        deck.reset_stats();

        assert_eq!(deck, once);
        assert!(deck.flashcards.iter().all(|c| c.wrong_count == 0));
    }

    #[test]
    fn test_hardest_without_errors() {
        assert_eq!(create_test_deck().hardest(), Hardest::NoErrors);
        assert_eq!(Deck::default().hardest(), Hardest::NoErrors);
    }

    #[test]
    fn test_hardest_single() {
        let mut deck = create_test_deck();
        deck.record_wrong(1);
        deck.record_wrong(1);
        deck.record_wrong(0);

        match deck.hardest() {
            Hardest::Single(card) => {
                assert_eq!(card.front, "cat");
                assert_eq!(card.wrong_count, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_hardest_tie_in_deck_order() {
        let mut deck = create_test_deck();
        deck.record_wrong(2);
        deck.record_wrong(0);

        match deck.hardest() {
            Hardest::Tied(cards) => {
                let fronts: Vec<_> = cards.iter().map(|c| c.front.as_str()).collect();
                assert_eq!(fronts, ["dog", "bird"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_find_by_definition_skips_asked_card() {
        let deck = create_test_deck();

        assert_eq!(deck.find_by_definition_except("chat", 0).unwrap().front, "cat");
        assert!(deck.find_by_definition_except("chat", 1).is_none());
        assert!(deck.find_by_definition_except("pferd", 0).is_none());
    }
}

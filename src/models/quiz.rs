//! Quiz rounds: picking a card at random and grading the answer given for it.

use super::Deck;
use rand::Rng;

/// Outcome of a single quiz answer.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong {
        expected: String,
    },
    /// The answer is the definition of another card in the deck.
    WrongOtherCard {
        expected: String,
        matching_term: String,
    },
}

/// Picks a card index uniformly over the current deck, or `None` for an empty deck.
pub fn pick_card<R: Rng>(deck: &Deck, rng: &mut R) -> Option<usize> {
    if deck.is_empty() {
        None
    } else {
        Some(rng.random_range(0..deck.len()))
    }
}

/// Grades `answer` for the card at `index`, counting an error on the card when wrong.
pub fn grade(deck: &mut Deck, index: usize, answer: &str) -> Option<Verdict> {
    let expected = deck.get(index)?.back.clone();
    if answer == expected {
        return Some(Verdict::Correct);
    }

    deck.record_wrong(index);
    let verdict = match deck.find_by_definition_except(answer, index) {
        Some(other) => Verdict::WrongOtherCard {
            expected,
            matching_term: other.front.clone(),
        },
        None => Verdict::Wrong { expected },
    };
    Some(verdict)
}

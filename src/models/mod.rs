pub mod deck;
pub mod flashcard;
pub mod quiz;

pub use deck::{Deck, Hardest};
pub use flashcard::Flashcard;
pub use quiz::Verdict;

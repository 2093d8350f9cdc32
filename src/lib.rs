pub mod error;
pub mod export;
pub mod models;
pub mod session;

pub use error::{DeckError, PersistError, SessionError};
pub use models::{Deck, Flashcard, Hardest, Verdict};
pub use session::{Session, SessionConfig};

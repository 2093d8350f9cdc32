//! Error types shared by the deck, persistence and session layers.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when a mutation would break the deck's uniqueness rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("the term \"{0}\" already exists")]
    DuplicateTerm(String),
    #[error("the definition \"{0}\" already exists")]
    DuplicateDefinition(String),
}

/// Errors emitted while importing or exporting a deck file.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file could not be opened or read. Recoverable.
    #[error("cannot read {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed deck file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot serialize deck: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input stream closed")]
    InputClosed,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
    /// A deck rule was broken after input validation passed.
    #[error("internal deck error: {0}")]
    Deck(#[from] DeckError),
    #[error("cannot write transcript to {}: {source}", path.display())]
    Transcript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SessionError {
    /// True when the session ended because input ran out rather than on a failure.
    pub fn is_clean_shutdown(&self) -> bool {
        matches!(self, SessionError::InputClosed)
    }
}

pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_closed_input_is_clean_shutdown() {
        assert!(SessionError::InputClosed.is_clean_shutdown());

        let io = std::io::Error::other("broken pipe");
        assert!(!SessionError::Io(io).is_clean_shutdown());

        let write = PersistError::Write {
            path: PathBuf::from("deck.json"),
            source: std::io::Error::other("disk full"),
        };
        assert!(!SessionError::from(write).is_clean_shutdown());
    }

    #[test]
    fn test_deck_error_becomes_internal_session_error() {
        let err = SessionError::from(DeckError::DuplicateTerm("dog".to_string()));

        assert!(matches!(err, SessionError::Deck(DeckError::DuplicateTerm(_))));
        assert_eq!(
            err.to_string(),
            "internal deck error: the term \"dog\" already exists"
        );
    }
}

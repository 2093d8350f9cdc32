//! JSON import/export module for flashcard decks.
//! The file holds a JSON array of cards, each with its `front`, `back` and `wrongCount`.

use crate::error::PersistError;
use crate::models::Deck;
use std::fs;
use std::path::Path;

/// Exports a deck to a JSON file at the specified path, creating or truncating it.
pub fn export_json_to_path(deck: &Deck, path: &Path) -> Result<(), PersistError> {
    let json_string = serde_json::to_string_pretty(deck)?;
    fs::write(path, json_string).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("exported {} cards to {}", deck.len(), path.display());
    Ok(())
}

/// Imports a deck from a JSON file.
/// An unreadable file yields `PersistError::NotFound`, invalid JSON `PersistError::Malformed`.
pub fn import_json(path: &Path) -> Result<Deck, PersistError> {
    let contents = fs::read_to_string(path).map_err(|source| PersistError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let deck: Deck = serde_json::from_str(&contents).map_err(|source| PersistError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("imported {} cards from {}", deck.len(), path.display());
    Ok(deck)
}

//! Flashcard is a pair <term, definition> plus the number of wrong answers given for it.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub wrong_count: u32,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            wrong_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_creation() {
        let card = Flashcard::new("dog", "chien");

        assert_eq!(card.front, "dog");
        assert_eq!(card.back, "chien");
        assert_eq!(card.wrong_count, 0);
    }

    #[test]
    fn test_flashcard_serialized_field_names() {
        let mut card = Flashcard::new("dog", "chien");
        card.wrong_count = 3;

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["front"], "dog");
        assert_eq!(json["back"], "chien");
        assert_eq!(json["wrongCount"], 3);
    }

    #[test]
    fn test_missing_wrong_count_defaults_to_zero() {
        let card: Flashcard = serde_json::from_str(r#"{"front":"cat","back":"chat"}"#).unwrap();
        assert_eq!(card.wrong_count, 0);
    }
}

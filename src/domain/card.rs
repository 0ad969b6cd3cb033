// src/domain/card.rs
use serde::Serialize;

/// One flashcard: a question front and an answer back.
///
/// Invariant: neither field contains a tab or line-break character. The
/// constructor sanitizes both so a card can always be serialized as a single
/// `front<TAB>back` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: sanitize_field(&front.into()),
            back: sanitize_field(&back.into()),
        }
    }
}

/// Collapse characters that would break the one-line-per-card layout.
fn sanitize_field(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| if matches!(c, '\t' | '\n' | '\r') { ' ' } else { c })
        .collect();
    cleaned.trim().to_string()
}

/// One line of a normalized deck.
///
/// Lines that carry no field delimiter cannot be reinterpreted as a card and
/// are kept verbatim rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DeckLine {
    Card(Flashcard),
    Unparsed(String),
}

/// Ordered sequence of normalized deck lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Deck {
    lines: Vec<DeckLine>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_card(&mut self, card: Flashcard) {
        self.lines.push(DeckLine::Card(card));
    }

    pub fn push_unparsed(&mut self, line: impl Into<String>) {
        self.lines.push(DeckLine::Unparsed(line.into()));
    }

    pub fn lines(&self) -> &[DeckLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, DeckLine::Card(_)))
            .count()
    }

    pub fn unparsed_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, DeckLine::Unparsed(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_clean_fields_when_creating_card_then_stores_them_unchanged() {
        let card = Flashcard::new("What is photosynthesis?", "Conversion of light to energy.");

        assert_eq!(card.front, "What is photosynthesis?");
        assert_eq!(card.back, "Conversion of light to energy.");
    }

    #[test]
    fn given_fields_with_breaks_and_tabs_when_creating_card_then_collapses_to_spaces() {
        let card = Flashcard::new("Question?\nwrapped", "Answer\twith\rnoise");

        assert_eq!(card.front, "Question? wrapped");
        assert_eq!(card.back, "Answer with noise");
    }

    #[test]
    fn given_padded_fields_when_creating_card_then_trims_whitespace() {
        let card = Flashcard::new("  front  ", "  back  ");

        assert_eq!(card.front, "front");
        assert_eq!(card.back, "back");
    }

    #[test]
    fn given_mixed_lines_when_counting_then_separates_cards_from_unparsed() {
        let mut deck = Deck::new();
        deck.push_card(Flashcard::new("Q", "A"));
        deck.push_unparsed("stray commentary");
        deck.push_card(Flashcard::new("Q2", "A2"));

        assert_eq!(deck.card_count(), 2);
        assert_eq!(deck.unparsed_count(), 1);
        assert_eq!(deck.lines().len(), 3);
    }

    #[test]
    fn given_new_deck_when_checking_then_is_empty() {
        let deck = Deck::new();

        assert!(deck.is_empty());
        assert_eq!(deck.card_count(), 0);
    }
}

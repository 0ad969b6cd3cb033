// src/ports/tsv.rs
use crate::domain::{Deck, DeckLine};

/// Renders a deck into the two-field tab-separated layout flashcard tools
/// import directly: `front<TAB>back`, one record per line, UTF-8, no header
/// row and no trailing newline.
#[derive(Debug, Default)]
pub struct TsvPresenter;

impl TsvPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, deck: &Deck) -> String {
        deck.lines()
            .iter()
            .map(|line| match line {
                DeckLine::Card(card) => format!("{}\t{}", card.front, card.back),
                DeckLine::Unparsed(raw) => raw.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Deck, Flashcard};

    #[test]
    fn given_cards_when_rendering_then_joins_tab_separated_lines() {
        let mut deck = Deck::new();
        deck.push_card(Flashcard::new("Q1", "A1"));
        deck.push_card(Flashcard::new("Q2", "A2"));

        assert_eq!(TsvPresenter::new().render(&deck), "Q1\tA1\nQ2\tA2");
    }

    #[test]
    fn given_unparsed_line_when_rendering_then_emits_it_verbatim() {
        let mut deck = Deck::new();
        deck.push_card(Flashcard::new("Q", "A"));
        deck.push_unparsed("no delimiter here");

        assert_eq!(
            TsvPresenter::new().render(&deck),
            "Q\tA\nno delimiter here"
        );
    }

    #[test]
    fn given_empty_deck_when_rendering_then_returns_empty_string() {
        assert_eq!(TsvPresenter::new().render(&Deck::new()), "");
    }

    #[test]
    fn given_single_card_when_rendering_then_has_no_trailing_newline() {
        let mut deck = Deck::new();
        deck.push_card(Flashcard::new("Q", "A"));

        let rendered = TsvPresenter::new().render(&deck);

        assert!(!rendered.ends_with('\n'));
        assert_eq!(rendered, "Q\tA");
    }
}

// src/application/generator.rs
use tracing::{debug, info, warn};

use crate::domain::{assemble_prompt, normalize, Deck, DomainError, PromptInput};

/// Seam to the external text-generation service.
///
/// One instruction string in, the raw completion text out. Implementations own
/// transport, timeouts and credentials; failures surface as `DomainError` and
/// are never retried here.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}

pub struct CardGenerator<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> CardGenerator<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Assemble the instruction template, run it through the generator and
    /// normalize the raw response into a deck.
    pub fn generate_deck(&self, input: &PromptInput) -> Result<Deck, DomainError> {
        let prompt = assemble_prompt(input);
        debug!(prompt_len = prompt.len(), "assembled instruction prompt");

        let raw = self.generator.generate(&prompt)?;
        debug!(raw_len = raw.len(), "received raw model output");

        let deck = normalize(&raw);
        info!(
            cards = deck.card_count(),
            unparsed = deck.unparsed_count(),
            "normalized model output"
        );
        if deck.unparsed_count() > 0 {
            warn!(
                unparsed = deck.unparsed_count(),
                "some lines had no field delimiter and were kept verbatim"
            );
        }

        Ok(deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Preferences;
    use crate::util::testing::MockTextGenerator;

    fn input() -> PromptInput {
        PromptInput {
            subject: "Cell biology".to_string(),
            area: "Biology".to_string(),
            topics: "Mitosis; Meiosis".to_string(),
            prefs: Preferences::default(),
        }
    }

    #[test]
    fn given_wellformed_response_when_generating_then_returns_normalized_deck() {
        // Arrange
        let mock = MockTextGenerator::with_response("Q1\tA1\n\nQ2\tA2\n");
        let generator = CardGenerator::new(mock);

        // Act
        let deck = generator.generate_deck(&input()).expect("should succeed");

        // Assert
        assert_eq!(deck.card_count(), 2);
        assert_eq!(deck.unparsed_count(), 0);
    }

    #[test]
    fn given_failing_service_when_generating_then_propagates_error() {
        // Arrange
        let mock = MockTextGenerator::with_failure("request timed out");
        let generator = CardGenerator::new(mock);

        // Act
        let result = generator.generate_deck(&input());

        // Assert
        assert!(matches!(result, Err(DomainError::ExternalCallFailure(_))));
    }

    #[test]
    fn given_generator_when_generating_then_sends_assembled_prompt() {
        // Arrange
        let mock = MockTextGenerator::with_response("Q\tA");
        let generator = CardGenerator::new(mock);

        // Act
        generator.generate_deck(&input()).expect("should succeed");

        // Assert
        let sent = generator.generator.last_prompt().expect("prompt recorded");
        assert!(sent.contains("Cell biology"));
        assert!(sent.contains("Mitosis; Meiosis"));
    }

    #[test]
    fn given_messy_response_when_generating_then_deck_is_repaired() {
        // Arrange
        let mock = MockTextGenerator::with_response("\nFront A\tBack A\n\nFront B\nstray\tBack B\t\n");
        let generator = CardGenerator::new(mock);

        // Act
        let deck = generator.generate_deck(&input()).expect("should succeed");

        // Assert
        assert_eq!(deck.card_count(), 2);
    }
}

use anyhow::Result;
use cardforge::application::CardGenerator;
use cardforge::domain::{DeckLine, DomainError, Preferences, PromptInput};
use cardforge::ports::TsvPresenter;
use cardforge::util::testing::MockTextGenerator;

fn input() -> PromptInput {
    PromptInput {
        subject: "Geomorphology".to_string(),
        area: "Geography".to_string(),
        topics: "Earthquakes: causes; types;\nPlate tectonics: orogenesis".to_string(),
        prefs: Preferences::default(),
    }
}

#[test]
fn given_clean_model_output_when_generating_then_returns_importable_deck() -> Result<()> {
    // Arrange
    let mock = MockTextGenerator::with_response(
        "What causes earthquakes?\tSudden release of energy along faults.\n\
         What is orogenesis?\tMountain building through plate convergence.",
    );
    let generator = CardGenerator::new(mock);

    // Act
    let deck = generator.generate_deck(&input())?;
    let rendered = TsvPresenter::new().render(&deck);

    // Assert
    assert_eq!(deck.card_count(), 2);
    assert_eq!(
        rendered,
        "What causes earthquakes?\tSudden release of energy along faults.\n\
         What is orogenesis?\tMountain building through plate convergence."
    );
    Ok(())
}

#[test]
fn given_messy_model_output_when_generating_then_deck_is_repaired() -> Result<()> {
    // Arrange: leading blank line, a wrapped front field, a duplicated tab
    let mock =
        MockTextGenerator::with_response("\nFront A\tBack A\n\nFront B\nstray\tBack B\t\n");
    let generator = CardGenerator::new(mock);

    // Act
    let deck = generator.generate_deck(&input())?;
    let rendered = TsvPresenter::new().render(&deck);

    // Assert
    assert_eq!(rendered, "Front A\tBack A\nFront B stray\tBack B");
    Ok(())
}

#[test]
fn given_model_output_with_commentary_when_generating_then_keeps_it_unparsed() -> Result<()> {
    // Arrange
    let mock = MockTextGenerator::with_response(
        "Q1\tA1\nHere are your flashcards, happy studying!",
    );
    let generator = CardGenerator::new(mock);

    // Act
    let deck = generator.generate_deck(&input())?;

    // Assert: content is degraded, not dropped
    assert_eq!(deck.card_count(), 1);
    assert_eq!(deck.unparsed_count(), 1);
    assert!(matches!(
        deck.lines().last(),
        Some(DeckLine::Unparsed(line)) if line == "Here are your flashcards, happy studying!"
    ));
    Ok(())
}

#[test]
fn given_failing_external_call_when_generating_then_aborts_with_failure() {
    // Arrange
    let mock = MockTextGenerator::with_failure("408 request timeout");
    let generator = CardGenerator::new(mock);

    // Act
    let result = generator.generate_deck(&input());

    // Assert
    match result {
        Err(DomainError::ExternalCallFailure(message)) => {
            assert!(message.contains("408"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

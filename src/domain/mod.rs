// src/domain/mod.rs
pub mod card;
pub mod error;
pub mod normalize;
pub mod prompt;

pub use card::{Deck, DeckLine, Flashcard};
pub use error::DomainError;
pub use normalize::normalize;
pub use prompt::{
    assemble_prompt, CardDensity, ContentFocus, Language, OutputFormat, Preferences, PromptInput,
    QuestionStyle,
};

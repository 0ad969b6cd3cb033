// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No API key configured: set {0} or OPENAI_API_KEY")]
    MissingCredential(&'static str),
    #[error("Text generation failed: {0}")]
    ExternalCallFailure(String),
}

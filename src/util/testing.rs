// src/util/testing.rs

use anyhow::Result;
use std::cell::RefCell;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::TextGenerator;
use crate::domain::DomainError;

/// Shared mock generator for testing use cases that depend on TextGenerator.
///
/// Records the last prompt it was asked to complete and returns either a
/// canned response or a canned failure, so tests never touch the network.
pub struct MockTextGenerator {
    response: Result<String, String>,
    last_prompt: RefCell<Option<String>>,
}

impl MockTextGenerator {
    /// Generator that succeeds with the given raw model output.
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            last_prompt: RefCell::new(None),
        }
    }

    /// Generator that fails every call with the given message.
    pub fn with_failure(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            last_prompt: RefCell::new(None),
        }
    }

    /// The prompt from the most recent `generate` call, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.borrow().clone()
    }
}

impl TextGenerator for MockTextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        *self.last_prompt.borrow_mut() = Some(prompt.to_string());
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(DomainError::ExternalCallFailure(message.clone())),
        }
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "tokio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_canned_response_when_generating_then_returns_it() {
        let mock = MockTextGenerator::with_response("Q\tA");

        let result = mock.generate("some prompt").expect("should succeed");

        assert_eq!(result, "Q\tA");
    }

    #[test]
    fn given_canned_failure_when_generating_then_returns_external_call_failure() {
        let mock = MockTextGenerator::with_failure("connection reset");

        let result = mock.generate("some prompt");

        match result {
            Err(DomainError::ExternalCallFailure(message)) => {
                assert_eq!(message, "connection reset");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn given_generate_call_when_inspecting_then_last_prompt_is_recorded() {
        let mock = MockTextGenerator::with_response("Q\tA");
        assert!(mock.last_prompt().is_none());

        mock.generate("the instruction").expect("should succeed");

        assert_eq!(mock.last_prompt().as_deref(), Some("the instruction"));
    }
}

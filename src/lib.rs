// src/lib.rs
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{debug, info, warn};

use crate::application::CardGenerator;
use crate::cli::{Args, CardSpec, Command};
use crate::domain::{assemble_prompt, normalize, PromptInput};
use crate::infrastructure::{file_writer, Config, OpenAiGenerator};
use crate::ports::TsvPresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting cardforge with arguments");

    let config = load_config(args.config.as_deref())?;
    debug!(?config, "Effective configuration");

    match args.command {
        Command::Prompt { card, output } => {
            let input = build_prompt_input(&card, &config)?;
            let prompt = assemble_prompt(&input);
            deliver(output.as_deref(), &prompt)?;
        }
        Command::Generate { card, output } => {
            let input = build_prompt_input(&card, &config)?;
            let generator = OpenAiGenerator::from_env(&config.openai.model)?;
            let deck = CardGenerator::new(generator).generate_deck(&input)?;

            let rendered = TsvPresenter::new().render(&deck);
            let path = output.unwrap_or_else(|| config.output.deck_file.clone());
            file_writer::write_artifact(&path, &rendered)?;
            info!(
                path = %path.display(),
                cards = deck.card_count(),
                "Wrote flashcard deck"
            );
        }
        Command::Normalize { input, output } => {
            let raw = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;

            let deck = normalize(&raw);
            if deck.unparsed_count() > 0 {
                warn!(
                    unparsed = deck.unparsed_count(),
                    "Some lines had no field delimiter and were kept verbatim"
                );
            }
            info!(cards = deck.card_count(), "Normalized raw model output");

            let rendered = TsvPresenter::new().render(&deck);
            deliver(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            debug!(?path, "Using provided config path");
            Config::load(path)
        }
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(path),
            None => Ok(Config::default()),
        },
    }
}

/// Merge the CLI card spec with config defaults into a validated prompt input.
///
/// The assembler itself never validates, so the three required fields are
/// checked here, before it is invoked.
pub fn build_prompt_input(card: &CardSpec, config: &Config) -> Result<PromptInput> {
    let topics = match (&card.outline.topics, &card.outline.topics_file) {
        (Some(topics), _) => topics.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read topics file {}", path.display()))?,
        (None, None) => bail!("A topic outline is required (--topics or --topics-file)"),
    };

    let subject = card.subject.trim();
    let area = card.area.trim();
    let topics = topics.trim();
    if subject.is_empty() {
        bail!("Main subject must not be empty");
    }
    if area.is_empty() {
        bail!("Subject area must not be empty");
    }
    if topics.is_empty() {
        bail!("Topic outline must not be empty");
    }

    let mut prefs = config.preferences();
    if let Some(format) = card.output_format {
        prefs.output_format = format;
    }
    if let Some(density) = card.density {
        prefs.density = density;
    }
    if let Some(style) = card.question_style {
        prefs.question_style = style;
    }
    if let Some(focus) = card.content_focus {
        prefs.content_focus = focus;
    }
    if let Some(language) = card.language {
        prefs.language = language;
    }
    if let Some(exam) = &card.exam {
        prefs.exam = Some(exam.clone());
    }
    if let Some(value) = card.common_mistakes {
        prefs.include_common_mistakes = value;
    }
    if let Some(value) = card.tags {
        prefs.add_tags = value;
    }
    if let Some(value) = card.difficulty {
        prefs.mark_difficulty = value;
    }
    if let Some(value) = card.exam_context {
        prefs.include_exam_context = value;
    }

    Ok(PromptInput {
        subject: subject.to_string(),
        area: area.to_string(),
        topics: topics.to_string(),
        prefs,
    })
}

fn deliver(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            file_writer::write_artifact(path, contents)?;
            info!(path = %path.display(), "Wrote file");
        }
        None => println!("{contents}"),
    }
    Ok(())
}

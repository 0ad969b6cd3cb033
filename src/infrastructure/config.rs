// src/infrastructure/config.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{
    CardDensity, ContentFocus, Language, OutputFormat, Preferences, QuestionStyle,
};

/// TOML configuration, loaded from `<config_dir>/cardforge/config.toml` unless
/// overridden on the command line. Every field has a default, so a missing or
/// partial file never fails.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub openai: OpenAiSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Defaults {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default)]
    pub density: CardDensity,
    #[serde(default)]
    pub question_style: QuestionStyle,
    #[serde(default)]
    pub content_focus: ContentFocus,
    #[serde(default)]
    pub exam: Option<String>,
    #[serde(default = "default_true")]
    pub include_common_mistakes: bool,
    #[serde(default = "default_true")]
    pub add_tags: bool,
    #[serde(default = "default_true")]
    pub mark_difficulty: bool,
    #[serde(default = "default_true")]
    pub include_exam_context: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct OpenAiSection {
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct OutputSection {
    #[serde(default = "default_deck_file")]
    pub deck_file: PathBuf,
}

fn default_true() -> bool {
    true
}
fn default_model() -> String {
    "gpt-4o-mini".to_string()
}
fn default_deck_file() -> PathBuf {
    PathBuf::from("flashcards.txt")
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            language: Language::default(),
            output_format: OutputFormat::default(),
            density: CardDensity::default(),
            question_style: QuestionStyle::default(),
            content_focus: ContentFocus::default(),
            exam: None,
            include_common_mistakes: default_true(),
            add_tags: default_true(),
            mark_difficulty: default_true(),
            include_exam_context: default_true(),
        }
    }
}

impl Default for OpenAiSection {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            deck_file: default_deck_file(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config =
            toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load configuration, falling back to built-in defaults when the file
    /// does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Platform config file location, e.g. `~/.config/cardforge/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cardforge").join("config.toml"))
    }

    /// Preferences seeded from the `[defaults]` section.
    pub fn preferences(&self) -> Preferences {
        Preferences {
            output_format: self.defaults.output_format,
            density: self.defaults.density,
            question_style: self.defaults.question_style,
            content_focus: self.defaults.content_focus,
            language: self.defaults.language,
            exam: self.defaults.exam.clone(),
            include_common_mistakes: self.defaults.include_common_mistakes,
            add_tags: self.defaults.add_tags,
            mark_difficulty: self.defaults.mark_difficulty,
            include_exam_context: self.defaults.include_exam_context,
        }
    }
}

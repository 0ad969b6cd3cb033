// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{CardDensity, ContentFocus, Language, OutputFormat, QuestionStyle};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (prompt, generate, or normalize)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Assemble the instruction prompt for pasting into a chat assistant
    Prompt {
        #[command(flatten)]
        card: CardSpec,

        /// Write the prompt to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Call the configured model and write the normalized flashcard deck
    Generate {
        #[command(flatten)]
        card: CardSpec,

        /// Deck file to write (defaults to the configured output file)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Normalize raw model output into the tab-separated deck format
    Normalize {
        /// File holding the raw model output
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Write the result to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// What the flashcards should cover, plus presentation overrides. Unset
/// preference flags fall back to the config file defaults.
#[derive(clap::Args, Debug, Clone)]
pub struct CardSpec {
    /// Main subject (e.g. "Geomorphology")
    #[arg(short, long, value_name = "SUBJECT")]
    pub subject: String,

    /// Subject area (e.g. "Geography")
    #[arg(short, long, value_name = "AREA")]
    pub area: String,

    #[command(flatten)]
    pub outline: TopicOutline,

    /// Output format label mentioned in the prompt
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    /// Flashcard density per topic
    #[arg(long, value_enum, value_name = "DENSITY")]
    pub density: Option<CardDensity>,

    /// Question style
    #[arg(long, value_enum, value_name = "STYLE")]
    pub question_style: Option<QuestionStyle>,

    /// Content focus
    #[arg(long, value_enum, value_name = "FOCUS")]
    pub content_focus: Option<ContentFocus>,

    /// Language of the generated flashcards
    #[arg(long, value_enum, value_name = "LANGUAGE")]
    pub language: Option<Language>,

    /// Exam the flashcards prepare for (e.g. "ENEM")
    #[arg(long, value_name = "EXAM")]
    pub exam: Option<String>,

    /// Include common mistakes and trick questions
    #[arg(long, value_name = "BOOL")]
    pub common_mistakes: Option<bool>,

    /// Ask for tags per topic
    #[arg(long, value_name = "BOOL")]
    pub tags: Option<bool>,

    /// State a difficulty grade on each answer
    #[arg(long, value_name = "BOOL")]
    pub difficulty: Option<bool>,

    /// Include exam context on each answer
    #[arg(long, value_name = "BOOL")]
    pub exam_context: Option<bool>,
}

/// Topic outline source: inline text or a file, exactly one of the two.
#[derive(clap::Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct TopicOutline {
    /// Topic outline as inline text (sub-topics allowed, one per line)
    #[arg(short, long, value_name = "TOPICS")]
    pub topics: Option<String>,

    /// Read the topic outline from a file
    #[arg(long, value_name = "FILE")]
    pub topics_file: Option<PathBuf>,
}

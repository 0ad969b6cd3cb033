// src/domain/prompt.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Everything the instruction template needs: the three required study inputs
/// plus presentation preferences.
///
/// Callers guarantee `subject`, `area` and `topics` are non-empty before
/// assembling; the assembler itself performs no validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptInput {
    pub subject: String,
    pub area: String,
    pub topics: String,
    pub prefs: Preferences,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub output_format: OutputFormat,
    pub density: CardDensity,
    pub question_style: QuestionStyle,
    pub content_focus: ContentFocus,
    pub language: Language,
    /// Exam the cards target (e.g. "ENEM", "SAT"); generic wording when unset.
    pub exam: Option<String>,
    pub include_common_mistakes: bool,
    pub add_tags: bool,
    pub mark_difficulty: bool,
    pub include_exam_context: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            density: CardDensity::default(),
            question_style: QuestionStyle::default(),
            content_focus: ContentFocus::default(),
            language: Language::default(),
            exam: None,
            include_common_mistakes: true,
            add_tags: true,
            mark_difficulty: true,
            include_exam_context: true,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Tab-separated .txt for direct AnkiDroid import
    #[default]
    AnkiTsv,
    /// Comma-separated values for spreadsheets
    Csv,
    /// Plain markdown list
    Markdown,
}

impl OutputFormat {
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::AnkiTsv => "tab-separated .txt for AnkiDroid",
            OutputFormat::Csv => "csv for spreadsheets",
            OutputFormat::Markdown => "plain markdown",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CardDensity {
    /// One summary flashcard per topic
    Summary,
    /// Multiple detailed flashcards per topic
    #[default]
    Detailed,
}

impl CardDensity {
    pub fn label(&self) -> &'static str {
        match self {
            CardDensity::Summary => "one summary flashcard per topic",
            CardDensity::Detailed => "multiple detailed flashcards per topic",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionStyle {
    #[default]
    Direct,
    Contextual,
    Mixed,
}

impl QuestionStyle {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionStyle::Direct => "direct",
            QuestionStyle::Contextual => "contextual",
            QuestionStyle::Mixed => "mixed",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ContentFocus {
    #[default]
    Definitions,
    Examples,
    CommonMistakes,
    DefinitionsAndExamples,
    Comprehensive,
}

impl ContentFocus {
    pub fn label(&self) -> &'static str {
        match self {
            ContentFocus::Definitions => "conceptual definitions",
            ContentFocus::Examples => "applied exam-style examples",
            ContentFocus::CommonMistakes => "common mistakes and trick questions",
            ContentFocus::DefinitionsAndExamples => "definitions plus examples",
            ContentFocus::Comprehensive => "definitions, examples and common mistakes",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    English,
    Portuguese,
    Spanish,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Portuguese => "Português (Brasil)",
            Language::Spanish => "Español",
        }
    }

    /// Affirmative/negative token in the target language, used to render the
    /// boolean content toggles inside the template.
    pub fn yes_no(&self, value: bool) -> &'static str {
        match (self, value) {
            (Language::English, true) => "Yes",
            (Language::English, false) => "No",
            (Language::Portuguese, true) => "Sim",
            (Language::Portuguese, false) => "Não",
            (Language::Spanish, true) => "Sí",
            (Language::Spanish, false) => "No",
        }
    }
}

/// Assemble the fixed instruction template.
///
/// Pure substitution: the same input always produces the byte-identical
/// string, and each required field appears verbatim in the output.
pub fn assemble_prompt(input: &PromptInput) -> String {
    let prefs = &input.prefs;
    let exam = prefs.exam.as_deref().unwrap_or("the target exam");

    let prompt = format!(
        "\
You are an assistant specialized in creating study flashcards, delivered as a
plain-text file ready for direct import into AnkiDroid.

USER DATA:
- Main subject: {subject}
- Subject area: {area}
- Topic outline (including sub-topics, if any):
{topics}

PREFERENCES:
- Output format: {format}
- Flashcards per topic: {density}
- Question style: {style}
- Content focus: {focus}
- Language of all flashcards: {language}
- Exam the flashcards prepare for: {exam}
- Include common mistakes and trick questions: {mistakes}
- Add tags per topic: {tags}
- State a difficulty grade on each answer: {difficulty}
- Include exam context on each answer: {context}

ABSOLUTE RULES ON THE DELIVERY FORMAT:
- Each flashcard occupies exactly one line.
- Field 1: the question (front).
- Field 2: the complete answer (back) with explanation and, when requested
  above, the difficulty grade and exam context.
- The two fields are separated by one real tab character (ASCII 9). Never use
  spaces, multiple spaces or a literal \"\\t\" sequence as the separator.
- No field may contain an internal line break. Answers may be long, but the
  whole answer stays inside its single field on its single line.

CONTENT STRUCTURE PER FLASHCARD:
- A clear, objective question on the front.
- A complete, well-explained answer on the back.
- When requested above, finish the answer with:
  - Difficulty: (Basic / Intermediate / Advanced)
  - Exam context: how {exam} usually tests this topic.
- Scale the number of flashcards to the level of detail in the topic outline.

DO NOT INCLUDE:
- Headers, flashcard numbering, introductions, closing remarks, or any other
  text before, between or after the flashcard lines.

EXACT EXAMPLE OF TWO LINES (fields separated by a real tab):

What is photosynthesis?\tThe process by which plants, algae and some bacteria convert solar energy into chemical energy, producing glucose and oxygen. Difficulty: Basic. Exam context: usually tested through the carbon cycle and environmental impact.

What are the stages of photosynthesis?\tIt happens in two main stages: the light reactions (capturing solar energy, producing ATP and NADPH) and the Calvin cycle (fixing carbon into glucose). Difficulty: Intermediate. Exam context: appears in questions on plant energy metabolism.

MANDATORY FINAL OUTPUT:
- Only the flashcard lines, in the exact format above.
- No additional text of any kind.
",
        subject = input.subject,
        area = input.area,
        topics = input.topics,
        format = prefs.output_format.label(),
        density = prefs.density.label(),
        style = prefs.question_style.label(),
        focus = prefs.content_focus.label(),
        language = prefs.language.label(),
        exam = exam,
        mistakes = prefs.language.yes_no(prefs.include_common_mistakes),
        tags = prefs.language.yes_no(prefs.add_tags),
        difficulty = prefs.language.yes_no(prefs.mark_difficulty),
        context = prefs.language.yes_no(prefs.include_exam_context),
    );

    prompt.trim().to_string()
}

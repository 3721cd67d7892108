//! Category and question definitions.

use serde::{Deserialize, Serialize};

/// A question category: static data loaded once.
///
/// Serialized in the catalog file format:
///
/// ```json
/// { "category": "Deep Talk", "emoji": "💭", "questions": ["..."] }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category name.
    #[serde(rename = "category")]
    pub name: String,

    /// Display token.
    pub emoji: String,

    /// Prompts in catalog order.
    pub questions: Vec<String>,
}

impl Category {
    /// Create an empty category.
    pub fn new(name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
            questions: Vec::new(),
        }
    }

    /// Add a question.
    #[must_use]
    pub fn with_question(mut self, text: impl Into<String>) -> Self {
        self.questions.push(text.into());
        self
    }

    /// Add several questions.
    #[must_use]
    pub fn with_questions<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.questions.extend(texts.into_iter().map(Into::into));
        self
    }

    /// Tag every question with this category.
    pub fn tagged_questions(&self) -> impl Iterator<Item = Question> + '_ {
        self.questions
            .iter()
            .map(move |text| Question::new(text.clone(), self.name.clone(), self.emoji.clone()))
    }
}

/// A drawn question, tagged with its category.
///
/// The text is the uniqueness key for the used set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    /// Prompt text.
    pub text: String,
    /// Name of the category it came from.
    pub category: String,
    /// Category display token.
    pub emoji: String,
}

impl Question {
    /// Create a tagged question.
    pub fn new(text: impl Into<String>, category: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            emoji: emoji.into(),
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {}] {}", self.emoji, self.category, self.text)
    }
}

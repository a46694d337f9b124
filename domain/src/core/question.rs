//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question to be deliberated (Value Object)
///
/// Represents the single user input of a deliberation. It is embedded
/// verbatim into every stance, judge and synthesis prompt and never
/// changes for the lifetime of one deliberation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question
    ///
    /// Fails with [`DomainError::InvalidQuestion`] if the content is empty
    /// or only whitespace.
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::InvalidQuestion(
                "question cannot be empty".to_string(),
            ))
        } else {
            Ok(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::try_new("Should remote work be mandatory?").unwrap();
        assert_eq!(q.content(), "Should remote work be mandatory?");
    }

    #[test]
    fn test_question_try_from_str() {
        let q: Question = "What is Rust?".try_into().unwrap();
        assert_eq!(q.content(), "What is Rust?");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Question::try_new("").is_err());
        assert!(Question::try_new("   \n\t").is_err());
    }

    #[test]
    fn test_content_is_kept_verbatim() {
        let q = Question::try_new("  padded?  ").unwrap();
        assert_eq!(q.content(), "  padded?  ");
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let ok: Result<Question, _> = serde_json::from_str("\"Is tea better than coffee?\"");
        assert!(ok.is_ok());

        let empty: Result<Question, _> = serde_json::from_str("\"  \"");
        assert!(empty.is_err());
    }
}

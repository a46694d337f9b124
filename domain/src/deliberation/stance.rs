//! Stance types for deliberation arguments
//!
//! Every run asks the same question from three fixed perspectives. The
//! stance decides the role framing of the prompt; the argument carries the
//! generated text tagged with the stance that produced it.

use serde::{Deserialize, Serialize};

/// Fixed perspective a stance agent argues from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    /// Supports the best possible answer
    Pro,
    /// Opposes the common answer
    Con,
    /// Argues a different or edge-case perspective
    Alternative,
}

impl Stance {
    /// All stances in canonical order
    pub const ALL: [Stance; 3] = [Stance::Pro, Stance::Con, Stance::Alternative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Pro => "pro",
            Stance::Con => "con",
            Stance::Alternative => "alternative",
        }
    }

    /// Capitalized label used in judge prompts and score lines
    pub fn label(&self) -> &'static str {
        match self {
            Stance::Pro => "Pro",
            Stance::Con => "Con",
            Stance::Alternative => "Alternative",
        }
    }

    /// Match a free-form token (e.g. a judge's winner line) to a stance
    ///
    /// Accepts the label in any case plus the short forms `alt`,
    /// `opposing` and `supporting`.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token
            .trim()
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        match token.as_str() {
            "pro" | "supporting" => Some(Stance::Pro),
            "con" | "opposing" => Some(Stance::Con),
            "alternative" | "alt" => Some(Stance::Alternative),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Text produced by one stance agent in one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub stance: Stance,
    pub content: String,
}

impl Argument {
    pub fn new(stance: Stance, content: impl Into<String>) -> Self {
        Self {
            stance,
            content: content.into(),
        }
    }
}

/// The three arguments of a single run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StanceArguments {
    pub pro: Argument,
    pub con: Argument,
    pub alternative: Argument,
}

impl StanceArguments {
    pub fn new(
        pro: impl Into<String>,
        con: impl Into<String>,
        alternative: impl Into<String>,
    ) -> Self {
        Self {
            pro: Argument::new(Stance::Pro, pro),
            con: Argument::new(Stance::Con, con),
            alternative: Argument::new(Stance::Alternative, alternative),
        }
    }

    pub fn get(&self, stance: Stance) -> &Argument {
        match stance {
            Stance::Pro => &self.pro,
            Stance::Con => &self.con,
            Stance::Alternative => &self.alternative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_variants() {
        assert_eq!(Stance::from_token("Pro"), Some(Stance::Pro));
        assert_eq!(Stance::from_token(" CON "), Some(Stance::Con));
        assert_eq!(Stance::from_token("**Alternative**"), Some(Stance::Alternative));
        assert_eq!(Stance::from_token("alt."), Some(Stance::Alternative));
        assert_eq!(Stance::from_token("nobody"), None);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&Stance::Alternative).unwrap();
        assert_eq!(json, "\"alternative\"");
    }

    #[test]
    fn test_stance_arguments_are_tagged() {
        let args = StanceArguments::new("yes", "no", "maybe");
        for stance in Stance::ALL {
            assert_eq!(args.get(stance).stance, stance);
        }
        assert_eq!(args.get(Stance::Con).content, "no");
    }
}

//! Judge verdict parsing.
//!
//! The judge is asked to answer in a fixed labeled-section format:
//!
//! ```text
//! Winner: Con
//! Scores:
//! - Pro: 6
//! - Con: 8
//! - Alternative: 7
//! Reason: ...
//! ```
//!
//! Nothing forces the model to comply, so the parser is tolerant: markdown
//! emphasis, `N/10` scores, inline score lists and a winner on the line
//! after its label are all accepted. When no winner can be recognized the
//! verdict is kept as [`VerdictForm::Unstructured`]. The raw text is always
//! preserved verbatim.

use super::stance::Stance;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Lowest score the judge may assign
pub const MIN_SCORE: f64 = 0.0;
/// Highest score the judge may assign
pub const MAX_SCORE: f64 = 10.0;

static SCORE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(pro|con|alternative|alt)\b\s*(?:answer)?\s*[:=\-]?\s*(\d{1,2}(?:\.\d+)?)")
        .expect("score pattern is valid")
});

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s+").expect("list marker pattern is valid"));

/// Per-stance scores, `None` where the judge gave no readable score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StanceScores {
    pub pro: Option<f64>,
    pub con: Option<f64>,
    pub alternative: Option<f64>,
}

impl StanceScores {
    pub fn get(&self, stance: Stance) -> Option<f64> {
        match stance {
            Stance::Pro => self.pro,
            Stance::Con => self.con,
            Stance::Alternative => self.alternative,
        }
    }

    fn set_if_absent(&mut self, stance: Stance, score: f64) {
        let slot = match stance {
            Stance::Pro => &mut self.pro,
            Stance::Con => &mut self.con,
            Stance::Alternative => &mut self.alternative,
        };
        if slot.is_none() {
            *slot = Some(score.clamp(MIN_SCORE, MAX_SCORE));
        }
    }

    /// Whether every stance received a score
    pub fn is_complete(&self) -> bool {
        self.pro.is_some() && self.con.is_some() && self.alternative.is_some()
    }
}

/// Verdict fields recovered from a compliant judge response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredVerdict {
    pub winner: Stance,
    pub scores: StanceScores,
    /// Justification text; empty when the judge omitted the section
    pub reason: String,
}

/// Result of parsing a judge response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VerdictForm {
    Structured(StructuredVerdict),
    Unstructured { rationale: String },
}

/// A judge verdict: the raw text plus whatever structure could be read from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    raw: String,
    form: VerdictForm,
}

impl Verdict {
    /// Parse a raw judge response
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let form = parse_verdict(&raw);
        Self { raw, form }
    }

    /// The judge response exactly as returned by the gateway
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn form(&self) -> &VerdictForm {
        &self.form
    }

    pub fn is_structured(&self) -> bool {
        matches!(self.form, VerdictForm::Structured(_))
    }

    pub fn winner(&self) -> Option<Stance> {
        match &self.form {
            VerdictForm::Structured(v) => Some(v.winner),
            VerdictForm::Unstructured { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    None,
    Winner,
    Scores,
    Reason,
}

/// Remove markdown decoration around a line
fn strip_markup(line: &str) -> String {
    let cleaned: String = line
        .chars()
        .filter(|c| !matches!(c, '*' | '_' | '#' | '`'))
        .collect();
    let cleaned = cleaned.trim().trim_start_matches(['-', '>', '•']).trim();
    LIST_MARKER.replace(cleaned, "").trim().to_string()
}

/// Split `Label: value` (or a bare `Label`) into a recognized section and
/// its inline value
fn section_header(line: &str) -> Option<(Section, &str)> {
    let (label, value) = line.split_once(':').unwrap_or((line, ""));
    let section = match label.trim().to_lowercase().as_str() {
        "winner" | "winning answer" | "chosen winner" => Section::Winner,
        "scores" | "score" => Section::Scores,
        "reason" | "reasoning" | "explanation" | "justification" => Section::Reason,
        _ => return None,
    };
    Some((section, value.trim()))
}

fn winner_from_text(text: &str) -> Option<Stance> {
    text.split(|c: char| c.is_whitespace() || c == ',' || c == '(' || c == ')')
        .find_map(Stance::from_token)
}

fn collect_scores(text: &str, scores: &mut StanceScores) {
    for caps in SCORE_PATTERN.captures_iter(text) {
        let stance = caps.get(1).and_then(|m| Stance::from_token(m.as_str()));
        let score = caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok());
        if let (Some(stance), Some(score)) = (stance, score) {
            scores.set_if_absent(stance, score);
        }
    }
}

/// Parse a judge response into a [`VerdictForm`].
///
/// A response is `Structured` as soon as a winner can be recognized;
/// scores and reason are filled in on a best-effort basis.
pub fn parse_verdict(raw: &str) -> VerdictForm {
    let mut section = Section::None;
    let mut winner: Option<Stance> = None;
    let mut awaiting_winner = false;
    let mut scores = StanceScores::default();
    let mut reason_lines: Vec<String> = Vec::new();

    for line in raw.lines() {
        let cleaned = strip_markup(line);

        if let Some((next, value)) = section_header(&cleaned) {
            section = next;
            match section {
                Section::Winner => {
                    if winner.is_none() {
                        winner = winner_from_text(value);
                        awaiting_winner = winner.is_none() && value.is_empty();
                    }
                }
                Section::Scores => collect_scores(value, &mut scores),
                Section::Reason => {
                    if !value.is_empty() {
                        reason_lines.push(value.to_string());
                    }
                }
                Section::None => {}
            }
            continue;
        }

        if cleaned.is_empty() {
            if section == Section::Reason && !reason_lines.is_empty() {
                reason_lines.push(String::new());
            }
            continue;
        }

        if awaiting_winner {
            winner = winner_from_text(&cleaned);
            awaiting_winner = false;
            continue;
        }

        match section {
            Section::Scores => collect_scores(&cleaned, &mut scores),
            Section::Reason => reason_lines.push(line.trim().to_string()),
            Section::Winner | Section::None => {}
        }
    }

    match winner {
        Some(winner) => {
            while reason_lines.last().is_some_and(|l| l.is_empty()) {
                reason_lines.pop();
            }
            VerdictForm::Structured(StructuredVerdict {
                winner,
                scores,
                reason: reason_lines.join("\n"),
            })
        }
        None => VerdictForm::Unstructured {
            rationale: raw.trim().to_string(),
        },
    }
}

//! Prompt templates for the deliberation flow

use crate::core::string::preview;
use crate::deliberation::similarity::SimilarityScore;
use crate::deliberation::stance::{Stance, StanceArguments};

/// Number of characters of each answer quoted in the follow-up prompt
pub const ANSWER_PREVIEW_CHARS: usize = 100;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Role header and instruction for a stance agent
    fn stance_framing(stance: Stance) -> (&'static str, &'static str, &'static str) {
        match stance {
            Stance::Pro => (
                "[PRO AGENT]",
                "I strongly SUPPORT the best possible answer.",
                "Answer with confidence and logical reasoning.",
            ),
            Stance::Con => (
                "[CON AGENT]",
                "I strongly OPPOSE the common answer.",
                "Point out flaws, risks, and counterexamples.",
            ),
            Stance::Alternative => (
                "[ALTERNATIVE AGENT]",
                "I provide a different or edge-case perspective.",
                "Challenge assumptions others might ignore.",
            ),
        }
    }

    /// Prompt for one stance agent
    pub fn stance_prompt(stance: Stance, question: &str) -> String {
        let (header, position, instruction) = Self::stance_framing(stance);
        format!(
            r#"{header}
{position}

Question:
{question}

{instruction}"#
        )
    }

    /// Prompt for the judge over the three stance arguments
    pub fn judge_prompt(question: &str, arguments: &StanceArguments) -> String {
        let mut prompt = format!(
            r#"[JUDGE AGENT]

You are an impartial judge AI.

Question:
{question}

Candidate Answers:
"#
        );

        for stance in Stance::ALL {
            prompt.push_str(&format!(
                "\n{} ANSWER:\n{}\n",
                stance.label().to_uppercase(),
                arguments.get(stance).content
            ));
        }

        prompt.push_str(
            r#"
Your task:
1. Score each answer from 0-10 based on logical consistency and reasoning quality
2. Pick ONE winner
3. Explain briefly why it won

Return STRICTLY in this format:

Winner:
Scores:
- Pro:
- Con:
- Alternative:
Reason:"#,
        );

        prompt
    }

    /// Prompt for the synthesizer, given the judge's raw verdict
    pub fn synthesis_prompt(question: &str, verdict: &str) -> String {
        format!(
            r#"You are a senior AI system.

Question:
{question}

Judge Decision:
{verdict}

Task:
- Produce a single, clear, balanced final answer
- Respect the judge's chosen reasoning
- Avoid extreme confidence
- Be concise and responsible

Return ONLY the final answer."#
        )
    }

    /// Prompt asking what would change a low-confidence conclusion
    pub fn what_would_change_prompt(
        question: &str,
        similarity: SimilarityScore,
        final_answers: &[&str],
    ) -> String {
        let mut prompt = format!(
            "The deliberation system ran {} times and produced semantically different results (similarity: {}):\n",
            final_answers.len(),
            similarity
        );

        for (i, answer) in final_answers.iter().enumerate() {
            prompt.push_str(&format!(
                "- Answer {}: {}...\n",
                i + 1,
                preview(answer, ANSWER_PREVIEW_CHARS)
            ));
        }

        prompt.push_str(&format!(
            r#"
Question: {question}

Given this disagreement, what additional information or clarification would most likely change or strengthen the conclusion? Be specific and concise."#
        ));

        prompt
    }
}

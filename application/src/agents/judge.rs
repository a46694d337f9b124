//! Judge agent: scores the three stances and picks a winner

use crate::ports::generation_gateway::{GenerationError, GenerationGateway};
use deliberation_domain::{PromptTemplate, Question, StanceArguments, Verdict};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct Judge<G: GenerationGateway> {
    gateway: Arc<G>,
}

impl<G: GenerationGateway> Judge<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Adjudicate among the three arguments
    ///
    /// The returned [`Verdict`] keeps the judge's text unmodified; the
    /// tolerant parse is attached alongside it.
    pub async fn adjudicate(
        &self,
        question: &Question,
        arguments: &StanceArguments,
    ) -> Result<Verdict, GenerationError> {
        let prompt = PromptTemplate::judge_prompt(question.content(), arguments);
        let raw = self.gateway.generate(&prompt).await?;
        let verdict = Verdict::parse(raw);

        match verdict.winner() {
            Some(winner) => debug!(%winner, "judge verdict parsed"),
            None => warn!("judge response had no recognizable winner; keeping it unstructured"),
        }

        Ok(verdict)
    }
}

impl<G: GenerationGateway> Clone for Judge<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::testing::ScriptedGateway;
    use deliberation_domain::Stance;

    #[tokio::test]
    async fn test_adjudicate_keeps_raw_text() {
        let raw = "Winner: Con\nScores:\n- Pro: 6\n- Con: 8\n- Alternative: 5\nReason: fewer gaps";
        let gateway = Arc::new(ScriptedGateway::replying(raw));
        let judge = Judge::new(Arc::clone(&gateway));
        let question = Question::try_new("Tabs or spaces?").unwrap();
        let arguments = StanceArguments::new("tabs", "spaces", "whatever the formatter says");

        let verdict = judge.adjudicate(&question, &arguments).await.unwrap();

        assert_eq!(verdict.raw(), raw);
        assert_eq!(verdict.winner(), Some(Stance::Con));
        let prompt = gateway.last_prompt();
        assert!(prompt.contains("PRO ANSWER:\ntabs"));
        assert!(prompt.contains("CON ANSWER:\nspaces"));
        assert!(prompt.contains("ALTERNATIVE ANSWER:\nwhatever the formatter says"));
    }

    #[tokio::test]
    async fn test_adjudicate_accepts_free_text() {
        let gateway = Arc::new(ScriptedGateway::replying("They are all reasonable."));
        let judge = Judge::new(gateway);
        let question = Question::try_new("q?").unwrap();

        let verdict = judge
            .adjudicate(&question, &StanceArguments::new("a", "b", "c"))
            .await
            .unwrap();

        assert!(!verdict.is_structured());
        assert_eq!(verdict.raw(), "They are all reasonable.");
    }
}

//! Synthesizer agent: turns the judge's verdict into one final answer

use crate::ports::generation_gateway::{GenerationError, GenerationGateway};
use deliberation_domain::{PromptTemplate, Question, Verdict};
use std::sync::Arc;

pub struct Synthesizer<G: GenerationGateway> {
    gateway: Arc<G>,
}

impl<G: GenerationGateway> Synthesizer<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn synthesize(
        &self,
        question: &Question,
        verdict: &Verdict,
    ) -> Result<String, GenerationError> {
        let prompt = PromptTemplate::synthesis_prompt(question.content(), verdict.raw());
        self.gateway.generate(&prompt).await
    }
}

impl<G: GenerationGateway> Clone for Synthesizer<G> {
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

    #[tokio::test]
    async fn test_synthesize_embeds_raw_verdict() {
        let gateway = Arc::new(ScriptedGateway::replying("Use spaces."));
        let synthesizer = Synthesizer::new(Arc::clone(&gateway));
        let question = Question::try_new("Tabs or spaces?").unwrap();
        let verdict = Verdict::parse("Winner: Con\nReason: consistency");

        let answer = synthesizer.synthesize(&question, &verdict).await.unwrap();

        assert_eq!(answer, "Use spaces.");
        let prompt = gateway.last_prompt();
        assert!(prompt.contains("Tabs or spaces?"));
        assert!(prompt.contains("Winner: Con\nReason: consistency"));
        assert!(prompt.contains("Return ONLY the final answer."));
    }
}

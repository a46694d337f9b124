//! Stance agent: argues the question from one fixed position

use crate::ports::generation_gateway::{GenerationError, GenerationGateway};
use deliberation_domain::{Argument, PromptTemplate, Question, Stance};
use std::sync::Arc;
use tracing::debug;

/// Agent arguing from a single [`Stance`]
pub struct StanceAgent<G: GenerationGateway> {
    gateway: Arc<G>,
    stance: Stance,
}

impl<G: GenerationGateway> StanceAgent<G> {
    pub fn new(gateway: Arc<G>, stance: Stance) -> Self {
        Self { gateway, stance }
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    /// Produce this stance's argument; the gateway text is kept verbatim
    pub async fn generate(&self, question: &Question) -> Result<Argument, GenerationError> {
        let prompt = PromptTemplate::stance_prompt(self.stance, question.content());
        let content = self.gateway.generate(&prompt).await?;
        debug!(stance = %self.stance, chars = content.len(), "stance argument generated");
        Ok(Argument::new(self.stance, content))
    }
}

impl<G: GenerationGateway> Clone for StanceAgent<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            stance: self.stance,
        }
    }
}

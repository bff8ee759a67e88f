use crate::agents::{Decomposer, Investigator, Merger};
use crate::llm::LLMClient;
use crate::memory::MemoryStore;
use crate::tools::search::SearchProvider;
use crate::types::{AppError, Finding, Result};
use serde_json::json;
use std::sync::Arc;

/// Coordinates the full research pipeline.
///
/// The run walks planning, research, and synthesis strictly in order; no
/// stage is skipped and nothing runs concurrently — each investigator
/// completes before the next begins. Stage failures are not caught here:
/// they propagate to the caller, and memory entries from completed stages
/// remain inspectable after the abort. Calling [`run`](Self::run) again
/// restarts from a cleared store; only the configuration survives between
/// runs.
pub struct ResearchCoordinator {
    llm: Arc<dyn LLMClient>,
    search: Arc<dyn SearchProvider>,
    max_sub_questions: usize,
    decomposer: Decomposer,
    merger: Merger,
    memory: MemoryStore,
}

impl ResearchCoordinator {
    pub fn new(
        llm: Arc<dyn LLMClient>,
        search: Arc<dyn SearchProvider>,
        max_sub_questions: usize,
    ) -> Self {
        let decomposer = Decomposer::new(Arc::clone(&llm));
        let merger = Merger::new(Arc::clone(&llm));

        Self {
            llm,
            search,
            max_sub_questions,
            decomposer,
            merger,
            memory: MemoryStore::new(),
        }
    }

    /// Execute the full pipeline for `question` and return the report.
    pub async fn run(&mut self, question: &str) -> Result<String> {
        tracing::info!(model = %self.llm.model_name(), "starting research for {:?}", question);
        self.memory.clear();

        // Planning
        let mut sub_questions = self.decomposer.decompose(question).await?;
        sub_questions.truncate(self.max_sub_questions);
        tracing::info!("decomposer produced {} sub-questions", sub_questions.len());
        self.memory.store("sub_questions", json!(sub_questions));

        // Research: one fresh investigator per sub-question, sequentially.
        let mut findings: Vec<Finding> = Vec::with_capacity(sub_questions.len());
        for (idx, sub_question) in sub_questions.iter().enumerate() {
            tracing::info!(
                "investigating {}/{}: {:?}",
                idx + 1,
                sub_questions.len(),
                sub_question
            );
            let investigator =
                Investigator::new(Arc::clone(&self.llm), Arc::clone(&self.search));
            let finding = investigator.research(sub_question).await?;
            tracing::info!("investigator {} complete: {} source(s)", idx + 1, finding.sources.len());

            self.memory
                .store(format!("finding_{}", idx + 1), to_stored(&finding)?);
            findings.push(finding);
        }
        self.memory.store("findings", to_stored(&findings)?);

        // Synthesis
        tracing::info!("synthesizing final report");
        let report = self.merger.synthesize(question, &findings).await?;
        self.memory.store("report", json!(report));

        tracing::info!("pipeline complete");
        Ok(report)
    }

    /// Access the shared memory store (useful for inspection and testing).
    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    pub fn max_sub_questions(&self) -> usize {
        self.max_sub_questions
    }
}

fn to_stored<T: serde::Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(format!("serialization failed: {}", e)))
}

//! Merger agent: combines all findings into one cited final report.

use crate::agents::AgentCore;
use crate::llm::LLMClient;
use crate::types::{Finding, Result};
use std::sync::Arc;

const SYSTEM_PROMPT: &str = "You are an expert technical writer specialising in research synthesis. \
    You will receive a research question and a collection of findings, each \
    with a summary and a list of source URLs. \
    Produce a structured final report with:\n\
    \x20 1. An executive summary (3-5 sentences)\n\
    \x20 2. A section for each sub-question with key insights\n\
    \x20 3. A numbered references section listing every unique source URL\n\
    Do NOT introduce facts, claims, or citations that are not present in \
    the provided findings. Clearly cite in-text references by number.";

/// Aggregates per-sub-question findings into a final report.
///
/// Structure of the output (executive summary, per-section insights,
/// numbered references) is delegated entirely to the instruction text; the
/// model's response is returned verbatim.
pub struct Merger {
    agent: AgentCore,
}

impl Merger {
    pub fn new(llm: Arc<dyn LLMClient>) -> Self {
        Self {
            agent: AgentCore::new(llm, SYSTEM_PROMPT),
        }
    }

    /// Generate a final report from `findings` for `question`.
    pub async fn synthesize(&self, question: &str, findings: &[Finding]) -> Result<String> {
        let prompt = format!(
            "Research question: {}\n\nFindings:\n{}",
            question,
            build_findings_block(findings)
        );
        self.agent.run(&prompt, None).await
    }
}

fn build_findings_block(findings: &[Finding]) -> String {
    findings
        .iter()
        .map(|finding| {
            let sources = if finding.sources.is_empty() {
                "none".to_string()
            } else {
                finding.sources.join(", ")
            };
            format!(
                "Sub-question: {}\nSummary: {}\nSources: {}",
                finding.sub_question, finding.summary, sources
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{LLMClient, LLMResponse};
    use crate::types::{Message, Result as QResult, ToolDefinition};
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn finding(sub_question: &str, summary: &str, sources: &[&str]) -> Finding {
        Finding {
            sub_question: sub_question.to_string(),
            summary: summary.to_string(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_findings_block_joins_sources() {
        let block = build_findings_block(&[finding("SQ", "S", &["https://x.com", "https://y.com"])]);
        assert!(block.contains("Sub-question: SQ"));
        assert!(block.contains("Summary: S"));
        assert!(block.contains("Sources: https://x.com, https://y.com"));
    }

    #[test]
    fn test_findings_block_empty_sources_marker() {
        let block = build_findings_block(&[finding("SQ", "S", &[])]);
        assert!(block.contains("Sources: none"));
    }

    struct RecordingLLM {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LLMClient for RecordingLLM {
        async fn chat(&self, messages: &[Message], _tools: &[ToolDefinition]) -> QResult<LLMResponse> {
            let user = messages
                .iter()
                .rev()
                .find(|m| m.role == crate::types::MessageRole::User)
                .map(|m| m.content.clone())
                .unwrap_or_default();
            self.prompts.lock().unwrap().push(user);
            Ok(LLMResponse::text("# Final Report\n\nExecutive summary here."))
        }

        fn model_name(&self) -> &str {
            "recording"
        }
    }

    #[tokio::test]
    async fn test_synthesize_includes_findings_in_prompt() {
        let llm = Arc::new(RecordingLLM {
            prompts: Mutex::new(Vec::new()),
        });
        let merger = Merger::new(llm.clone());

        let report = merger
            .synthesize("Question", &[finding("SQ", "S", &["https://x.com"])])
            .await
            .unwrap();

        assert!(report.contains("Final Report"));

        let prompts = llm.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Research question: Question"));
        assert!(prompts[0].contains("SQ"));
        assert!(prompts[0].contains("https://x.com"));
    }
}

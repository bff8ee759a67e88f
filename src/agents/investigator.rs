//! Investigator agent: answers one focused sub-question using an injected
//! search capability and emits a structured [`Finding`].

use crate::agents::AgentCore;
use crate::llm::LLMClient;
use crate::tools::registry::{Tool, ToolRegistry};
use crate::tools::search::{SearchProvider, SearchTool};
use crate::types::{Finding, Result};
use std::sync::Arc;

const SYSTEM_PROMPT: &str = "You are a rigorous research assistant. \
    You will be given a focused research sub-question. \
    Use the 'search' tool to retrieve relevant information. \
    Summarise what you found in 2-4 sentences and list every source URL \
    you relied on. Do not invent facts or sources that were not returned \
    by the search tool. \
    Format your answer as:\n\
    SUMMARY: <your summary>\n\
    SOURCES: <comma-separated list of URLs>";

const SUMMARY_TAG: &str = "SUMMARY:";
const SOURCES_TAG: &str = "SOURCES:";

/// Researches a single sub-question.
///
/// The search backend is injected at construction time so it can be
/// swapped (live API, stub, mock) without touching the agent. Each
/// instance owns a private conversation; instances are never shared
/// across sub-questions.
pub struct Investigator {
    agent: AgentCore,
    registry: ToolRegistry,
}

impl Investigator {
    pub fn new(llm: Arc<dyn LLMClient>, search: Arc<dyn SearchProvider>) -> Self {
        let search_tool = SearchTool::new(search);
        let tools = vec![search_tool.to_definition()];

        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(search_tool));

        Self {
            agent: AgentCore::new(llm, SYSTEM_PROMPT).with_tools(tools),
            registry,
        }
    }

    /// Investigate `sub_question` and return a structured finding.
    pub async fn research(&self, sub_question: &str) -> Result<Finding> {
        let raw = self.agent.run(sub_question, Some(&self.registry)).await?;
        Ok(extract_finding(sub_question, &raw))
    }
}

/// Scan the response for the two-line tagged format. The first tagged line
/// of each kind wins. An untagged response is accepted as-is: the whole
/// text becomes the summary and the source list stays empty.
fn extract_finding(sub_question: &str, raw: &str) -> Finding {
    let mut summary = None;
    let mut sources = None;

    for line in raw.lines() {
        if summary.is_none() {
            if let Some(rest) = line.strip_prefix(SUMMARY_TAG) {
                summary = Some(rest.trim().to_string());
                continue;
            }
        }
        if sources.is_none() {
            if let Some(rest) = line.strip_prefix(SOURCES_TAG) {
                sources = Some(
                    rest.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect(),
                );
            }
        }
    }

    Finding {
        sub_question: sub_question.to_string(),
        summary: summary.unwrap_or_else(|| raw.to_string()),
        sources: sources.unwrap_or_default(),
    }
}

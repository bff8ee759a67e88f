//! Decomposer agent: turns one broad research question into an ordered
//! list of focused sub-questions.

use crate::agents::AgentCore;
use crate::llm::LLMClient;
use crate::types::Result;
use std::sync::Arc;

const SYSTEM_PROMPT: &str = "You are a research planning expert. \
    Your sole task is to break a broad research question into 3 to 6 \
    focused, non-overlapping sub-questions that together fully cover the topic. \
    Return ONLY a JSON array of strings - no markdown, no explanation. \
    Example output: [\"Sub-question 1\", \"Sub-question 2\"]";

/// Decomposes a research question into sub-questions.
///
/// The 3-6 target is carried by the instruction only; the hard cap is
/// enforced by the coordinator, not here.
pub struct Decomposer {
    agent: AgentCore,
}

impl Decomposer {
    pub fn new(llm: Arc<dyn LLMClient>) -> Self {
        Self {
            agent: AgentCore::new(llm, SYSTEM_PROMPT),
        }
    }

    /// Return an ordered list of sub-questions for `question`.
    pub async fn decompose(&self, question: &str) -> Result<Vec<String>> {
        let raw = self
            .agent
            .run(&format!("Research question: {}", question), None)
            .await?;
        Ok(parse_sub_questions(&raw))
    }
}

/// Two-tier parse: strict JSON array first, line-splitting fallback second.
///
/// The fallback tolerates models that ignore the "JSON only" instruction
/// and answer with bulleted or numbered free text. A parse failure is
/// always recovered locally, never surfaced.
fn parse_sub_questions(raw: &str) -> Vec<String> {
    let cleaned = strip_code_fences(raw);

    if let Ok(sub_questions) = serde_json::from_str::<Vec<String>>(&cleaned) {
        return sub_questions;
    }

    cleaned
        .lines()
        .map(strip_bullet_punctuation)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "")
        .replace("```", "")
        .trim()
        .trim_matches('`')
        .trim()
        .to_string()
}

fn strip_bullet_punctuation(line: &str) -> &str {
    line.trim_start_matches(|c: char| {
        c.is_ascii_digit() || matches!(c, ' ' | '-' | '\u{2022}' | '*' | '.' | ')')
    })
    .trim_end()
}

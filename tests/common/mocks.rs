//! Mock implementations for testing.
//!
//! Provides scripted LLM clients that can be shared across test files
//! without duplication. All tests run with no API keys and no network.

use async_trait::async_trait;
use quest::llm::{LLMClient, LLMResponse};
use quest::types::{AppError, Message, Result, ToolCall, ToolDefinition};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted LLM client: pops one prepared response per `chat` call.
///
/// When the script runs out, further calls fail with an LLM error — a
/// convenient stand-in for an upstream backend failure mid-run.
pub struct ScriptedLLM {
    responses: Mutex<VecDeque<LLMResponse>>,
    calls: Mutex<usize>,
}

impl ScriptedLLM {
    pub fn new(responses: Vec<LLMResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(0),
        }
    }

    /// Number of chat calls made so far.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl LLMClient for ScriptedLLM {
    async fn chat(&self, _messages: &[Message], _tools: &[ToolDefinition]) -> Result<LLMResponse> {
        *self.calls.lock().unwrap() += 1;
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::Llm("scripted backend exhausted".to_string()))
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

/// A plain text response with no tool calls.
pub fn text_response(content: &str) -> LLMResponse {
    LLMResponse::text(content)
}

/// A response requesting one tool call.
pub fn tool_call_response(id: &str, name: &str, arguments: serde_json::Value) -> LLMResponse {
    LLMResponse {
        content: String::new(),
        tool_calls: vec![ToolCall {
            id: id.to_string(),
            name: name.to_string(),
            arguments,
        }],
        finish_reason: "tool_calls".to_string(),
    }
}

/// A tagged investigator answer in the expected two-line format.
pub fn tagged_finding(summary: &str, sources: &str) -> LLMResponse {
    LLMResponse::text(format!("SUMMARY: {}\nSOURCES: {}", summary, sources))
}

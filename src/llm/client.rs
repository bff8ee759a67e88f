use crate::types::{Message, Result, ToolCall, ToolDefinition};
use async_trait::async_trait;

/// Generic LLM client trait for provider abstraction.
///
/// One request/response cycle: the full ordered conversation goes in, one
/// response comes out. Tools are advertised when `tools` is non-empty and
/// the backend decides whether to invoke one — the call is never forced.
/// Retries and timeouts are the backend client's concern, not this trait's.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Send a conversation to the model, optionally advertising tools.
    async fn chat(&self, messages: &[Message], tools: &[ToolDefinition]) -> Result<LLMResponse>;

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

/// Response from an LLM chat request
#[derive(Debug, Clone)]
pub struct LLMResponse {
    /// The text content of the response
    pub content: String,
    /// Any tool calls requested by the model
    pub tool_calls: Vec<ToolCall>,
    /// The reason generation stopped (e.g., "stop", "tool_calls", "length")
    pub finish_reason: String,
}

impl LLMResponse {
    /// Plain text response with no tool calls.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tool_calls: Vec::new(),
            finish_reason: "stop".to_string(),
        }
    }

    /// Whether the model requested one or more tool invocations.
    pub fn requested_tools(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_response_has_no_tool_calls() {
        let response = LLMResponse::text("hello");
        assert!(!response.requested_tools());
        assert_eq!(response.finish_reason, "stop");
    }

    #[test]
    fn test_requested_tools() {
        let response = LLMResponse {
            content: String::new(),
            tool_calls: vec![ToolCall {
                id: "call_1".to_string(),
                name: "search".to_string(),
                arguments: json!({"query": "rust"}),
            }],
            finish_reason: "tool_calls".to_string(),
        };
        assert!(response.requested_tools());
    }
}

//! Agent framework: a generic conversational core plus the three
//! specialized agents of the research pipeline.
//!
//! Every agent is an [`AgentCore`] with a role-specific system prompt. The
//! core implements one request/response cycle with at most one round of
//! tool invocation: the model may request tools once, the results are fed
//! back, and the follow-up response is final. A second round of tool
//! requests is not serviced — its text content is returned as-is.

/// Question decomposition agent.
pub mod decomposer;
/// Per-sub-question research agent.
pub mod investigator;
/// Findings synthesis agent.
pub mod merger;

pub use decomposer::Decomposer;
pub use investigator::Investigator;
pub use merger::Merger;

use crate::llm::{LLMClient, LLMResponse};
use crate::tools::registry::ToolRegistry;
use crate::types::{Message, Result, ToolCall, ToolDefinition};
use serde_json::Value;
use std::sync::Arc;

/// Generic request/response cycle shared by every agent.
pub struct AgentCore {
    llm: Arc<dyn LLMClient>,
    system_prompt: String,
    tools: Vec<ToolDefinition>,
}

impl AgentCore {
    pub fn new(llm: Arc<dyn LLMClient>, system_prompt: impl Into<String>) -> Self {
        Self {
            llm,
            system_prompt: system_prompt.into(),
            tools: Vec::new(),
        }
    }

    /// Declare tools to advertise on every backend call. The backend
    /// decides whether to invoke one; the choice is never forced.
    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    /// Send `input`, handle at most one round of tool calls, return the
    /// assistant's final text.
    pub async fn run(&self, input: &str, registry: Option<&ToolRegistry>) -> Result<String> {
        let mut messages = vec![
            Message::system(self.system_prompt.clone()),
            Message::user(input),
        ];

        let response = self.llm.chat(&messages, &self.tools).await?;

        let registry = match registry {
            Some(registry) if response.requested_tools() => registry,
            _ => return Ok(response.content),
        };

        messages = self.append_tool_round(messages, &response, registry).await;

        let followup = self.llm.chat(&messages, &self.tools).await?;
        Ok(followup.content)
    }

    /// Append the assistant's tool-call message and one tool-result message
    /// per requested call, then hand the conversation back.
    async fn append_tool_round(
        &self,
        mut messages: Vec<Message>,
        response: &LLMResponse,
        registry: &ToolRegistry,
    ) -> Vec<Message> {
        messages.push(Message::assistant_with_tool_calls(
            response.content.clone(),
            response.tool_calls.clone(),
        ));

        for call in &response.tool_calls {
            let result = self.dispatch(registry, call).await;
            messages.push(Message::tool(call.id.clone(), result));
        }

        messages
    }

    /// Resolve one tool call against the registry. Failures become
    /// error-text results; they never abort the agent.
    async fn dispatch(&self, registry: &ToolRegistry, call: &ToolCall) -> String {
        if !registry.has_tool(&call.name) {
            tracing::warn!(tool = %call.name, "model requested unknown tool");
            return format!("Error: unknown tool '{}'", call.name);
        }

        tracing::debug!(tool = %call.name, "dispatching tool call");
        match registry.execute(&call.name, call.arguments.clone()).await {
            Ok(Value::String(text)) => text,
            Ok(value) => value.to_string(),
            Err(e) => format!("Error: {}", e),
        }
    }
}

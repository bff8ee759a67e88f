//! # Q.U.E.S.T - QUestion-driven Evidence Synthesis Tool
//!
//! An agentic research pipeline built in Rust: a broad natural-language
//! question is decomposed into focused sub-questions, each sub-question is
//! investigated through a pluggable search capability, and the findings are
//! merged into a single cited report.
//!
//! ## Overview
//!
//! Quest can be used in two ways:
//!
//! 1. **As a CLI** - run the `quest` binary
//! 2. **As a library** - wire the coordinator into your own pipeline
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use quest::llm::OpenAIClient;
//! use quest::research::ResearchCoordinator;
//! use quest::tools::StubSearch;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let llm = Arc::new(OpenAIClient::new(
//!         std::env::var("OPENAI_API_KEY")?,
//!         "https://api.openai.com/v1".to_string(),
//!         "gpt-4o-mini".to_string(),
//!     ));
//!
//!     let mut coordinator = ResearchCoordinator::new(llm, Arc::new(StubSearch), 6);
//!     let report = coordinator.run("What causes ocean acidification?").await?;
//!     println!("{}", report);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Data flows one direction through the pipeline:
//!
//! ```text
//! question -> sub-questions -> per-sub-question findings -> report
//! ```
//!
//! The coordinator owns an ephemeral [`memory::MemoryStore`] and persists
//! each stage's output there before the next stage starts, so a run that
//! aborts mid-pipeline leaves its completed stages inspectable. Execution
//! is fully sequential; each investigator runs to completion before the
//! next begins.
//!
//! Every agent shares the same conversational core
//! ([`agents::AgentCore`]): one backend request, at most one round of tool
//! dispatch, one follow-up request. Tool failures are folded back into the
//! conversation as error text rather than aborting the agent; backend
//! failures propagate to the caller. There are no retries anywhere —
//! every external call is attempted exactly once.

#![warn(missing_docs)]

/// Conversational agent core and the three pipeline agents.
pub mod agents;
/// CLI argument parsing.
pub mod cli;
/// LLM provider clients and abstractions.
pub mod llm;
/// Ephemeral inter-stage memory store.
pub mod memory;
/// Research pipeline coordination.
pub mod research;
/// Tool registry and search capabilities.
pub mod tools;
/// Core types (messages, tool calls, findings, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use agents::{AgentCore, Decomposer, Investigator, Merger};
pub use llm::{LLMClient, LLMResponse, OpenAIClient};
pub use memory::MemoryStore;
pub use research::ResearchCoordinator;
pub use tools::{ExaSearch, SearchProvider, StubSearch, Tool, ToolRegistry};
pub use types::{AppError, Finding, Message, MessageRole, Result, ToolCall, ToolDefinition};

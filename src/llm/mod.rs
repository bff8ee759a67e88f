//! Model backend abstractions.
//!
//! Every agent talks to the model through the [`LLMClient`] trait, which
//! takes an ordered message sequence plus an optional tool declaration and
//! returns one response. The concrete backend is injected at construction
//! time, so tests substitute a scripted client and never touch the network.

/// Backend-agnostic client trait and response type.
pub mod client;
/// OpenAI-compatible chat-completion backend.
pub mod openai;

pub use client::{LLMClient, LLMResponse};
pub use openai::OpenAIClient;

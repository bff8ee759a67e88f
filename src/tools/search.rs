//! Search capabilities injected into the research pipeline.
//!
//! The Investigator never hard-codes a backend: it receives a
//! [`SearchProvider`] at construction time, so live search can be swapped
//! for the deterministic [`StubSearch`] in tests and offline runs.

use crate::tools::registry::Tool;
use crate::types::{AppError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Fixed name under which the search capability is registered.
pub const SEARCH_TOOL_NAME: &str = "search";

const DEFAULT_EXA_BASE_URL: &str = "https://api.exa.ai";

/// Narrow capability interface: one query in, renderable text out.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<String>;
}

// ============= Exa (live) =============

/// Neural search powered by the Exa API (<https://exa.ai>).
///
/// Exa returns semantically relevant results with pre-extracted text
/// highlights rather than raw HTML snippets, which gives the Investigator
/// richer context for summarisation.
pub struct ExaSearch {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    max_results: usize,
    num_sentences: usize,
}

impl ExaSearch {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_EXA_BASE_URL.to_string(),
            max_results: 5,
            num_sentences: 3,
        }
    }

    /// Override the API endpoint (used by HTTP-level tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

#[derive(Debug, Deserialize)]
struct ExaResponse {
    #[serde(default)]
    results: Vec<ExaResult>,
}

#[derive(Debug, Deserialize)]
struct ExaResult {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    highlights: Vec<String>,
}

#[async_trait]
impl SearchProvider for ExaSearch {
    async fn search(&self, query: &str) -> Result<String> {
        let body = json!({
            "query": query,
            "numResults": self.max_results,
            "useAutoprompt": true,
            "contents": {
                "highlights": { "numSentences": self.num_sentences }
            }
        });

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Search(format!("Exa request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Search(format!(
                "Exa returned status {}",
                response.status()
            )));
        }

        let payload: ExaResponse = response
            .json()
            .await
            .map_err(|e| AppError::Search(format!("Exa response parse failed: {}", e)))?;

        if payload.results.is_empty() {
            return Ok("No results found.".to_string());
        }

        let mut lines = Vec::new();
        for result in &payload.results {
            let title = result.title.as_deref().unwrap_or("No title");
            let snippet = result.highlights.join(" ");
            lines.push(format!("[{}] {}", title, snippet));
            lines.push(format!("URL: {}", result.url.as_deref().unwrap_or("N/A")));
            lines.push(String::new());
        }
        Ok(lines.join("\n").trim().to_string())
    }
}

// ============= Stub (deterministic) =============

/// Deterministic stub search for offline development and testing.
///
/// Returns plausible-looking but entirely fake results so the full
/// pipeline can be exercised without any search API key.
pub struct StubSearch;

const STUB_RESULTS: &[(&str, &str, &str)] = &[
    (
        "Overview of the topic",
        "This article provides a comprehensive introduction to the subject.",
        "https://example.com/overview",
    ),
    (
        "Recent advances",
        "Researchers have made significant progress in this area over the past five years.",
        "https://example.com/recent-advances",
    ),
    (
        "Key challenges",
        "Several open problems remain, including scalability and interpretability.",
        "https://example.com/challenges",
    ),
];

#[async_trait]
impl SearchProvider for StubSearch {
    async fn search(&self, query: &str) -> Result<String> {
        let mut lines = vec![format!("Results for: {}", query), String::new()];
        for (title, snippet, url) in STUB_RESULTS {
            lines.push(format!("[{}] {}", title, snippet));
            lines.push(format!("URL: {}", url));
            lines.push(String::new());
        }
        Ok(lines.join("\n").trim().to_string())
    }
}

// ============= Registry adapter =============

/// Exposes a [`SearchProvider`] to the tool registry under the fixed
/// `search` name.
pub struct SearchTool {
    provider: Arc<dyn SearchProvider>,
}

impl SearchTool {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        SEARCH_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Search for information relevant to the query. \
         Returns a list of text excerpts with source URLs."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "A concise search query (max 10 words)."
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let query = args
            .get("query")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AppError::InvalidInput("Missing 'query' parameter".to_string()))?;

        let results = self.provider.search(query).await?;
        Ok(Value::String(results))
    }
}

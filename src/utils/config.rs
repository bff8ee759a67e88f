use std::env;

const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Credentials and endpoints read from the environment.
///
/// Nothing is validated here: presence checks happen at the process
/// boundary, before the pipeline is constructed, so a missing key in live
/// mode becomes a fatal user-visible message rather than a mid-run error.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_api_base: String,
    pub exa_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_api_base: env::var("OPENAI_API_BASE")
                .ok()
                .filter(|base| !base.is_empty())
                .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string()),
            exa_api_key: env::var("EXA_API_KEY").ok().filter(|k| !k.is_empty()),
        }
    }
}

//! Command-line interface for the quest binary.
//!
//! Uses clap for argument parsing. Argument handling and credential
//! validation live at this boundary; the pipeline itself never reads the
//! environment or the command line.

use clap::Parser;

/// Q.U.E.S.T - QUestion-driven Evidence Synthesis Tool
#[derive(Parser, Debug)]
#[command(
    name = "quest",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "Decompose a research question, investigate it with web search, and synthesize a cited report",
    after_help = "EXAMPLES:\n    \
                  quest \"What are the main causes of ocean acidification?\"\n    \
                  quest --stub \"Some question\"        # offline, no API keys required\n    \
                  quest --model gpt-4o \"Some question\"\n\n\
                  Live mode requires OPENAI_API_KEY and EXA_API_KEY in the environment\n\
                  (a .env file is honoured)."
)]
pub struct Cli {
    /// The broad research question to investigate
    pub question: String,

    /// Use the deterministic stub search backend instead of a real search
    /// API (useful for offline testing)
    #[arg(long)]
    pub stub: bool,

    /// Model name to use for all agents
    #[arg(long, default_value = "gpt-4o-mini")]
    pub model: String,

    /// Maximum number of sub-questions the decomposer may produce
    #[arg(long, default_value_t = 6)]
    pub max_sub_questions: usize,

    /// Enable debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

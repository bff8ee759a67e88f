//! Tool infrastructure for agent capabilities.
//!
//! Agents act beyond text generation through named tools. The model picks a
//! tool by name at runtime; dispatch resolves it by registry lookup, never
//! by reflection. Registries are supplied per agent invocation — no agent
//! owns a global tool set.

/// Tool trait and name-keyed registry.
pub mod registry;
/// Search capabilities: live Exa backend, deterministic stub, registry adapter.
pub mod search;

pub use registry::{Tool, ToolRegistry};
pub use search::{ExaSearch, SearchProvider, SearchTool, StubSearch};

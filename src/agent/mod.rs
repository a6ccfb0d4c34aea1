//! Static directory of SPSP topic agents
//!
//! Each agent is a named knowledge domain with its own prompt/answer
//! table, keyword list and suggested shortcuts. The dataset is embedded
//! in the binary and consumed read-only.

pub mod catalog;
pub mod registry;

pub use catalog::{Accent, Agent, KnowledgeEntry, ProtheusFunction};
pub use registry::get_agent_by_slug;

//! The compiled-in agent dataset
//!
//! Agents are authored in `assets/agents.yaml`, embedded with
//! `include_str!` and deserialized once on first access. The catalog is
//! immutable after construction; every consumer borrows from it.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One curated question/answer pair in an agent's knowledge base
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub prompt: String,
    pub answer: String,
}

/// A Protheus routine the agent can point users at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtheusFunction {
    pub code: String,
    pub title: String,
    pub description: String,
}

/// Visual identity carried through to presentation surfaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accent {
    pub gradient: String,
    pub glow: String,
    pub badge: String,
}

/// A topic-scoped agent: static knowledge domain with its own
/// prompt/answer table, keyword list and suggested shortcuts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier, used in lookups and CLI arguments
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub mission: String,
    pub focus_areas: Vec<String>,
    pub keywords: Vec<String>,
    pub shortcuts: Vec<String>,
    pub call_to_action: String,
    pub accent: Accent,
    #[serde(default)]
    pub protheus_functions: Vec<ProtheusFunction>,
    #[serde(default)]
    pub knowledge_base: Vec<KnowledgeEntry>,
}

const AGENTS_YAML: &str = include_str!("../../assets/agents.yaml");

static CATALOG: Lazy<Vec<Agent>> =
    Lazy::new(|| serde_yaml::from_str(AGENTS_YAML).expect("embedded agent catalog is valid YAML"));

/// All agents in authoring order. The global resolver scans this list in
/// fixed order, so ordering is part of the matching contract.
pub fn directory() -> &'static [Agent] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_parses() {
        assert!(!directory().is_empty());
    }

    #[test]
    fn test_slugs_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for agent in directory() {
            assert_eq!(agent.slug, agent.slug.to_lowercase(), "slug {} not lowercase", agent.slug);
            assert!(seen.insert(agent.slug.clone()), "duplicate slug {}", agent.slug);
        }
    }

    #[test]
    fn test_every_agent_is_answerable() {
        // Fallback composition reads focus areas 0 and 1 and the first
        // Protheus routine; the scorer needs at least one knowledge entry.
        for agent in directory() {
            assert!(agent.focus_areas.len() >= 2, "{} needs two focus areas", agent.slug);
            assert!(!agent.knowledge_base.is_empty(), "{} has empty knowledge base", agent.slug);
            assert!(!agent.keywords.is_empty(), "{} has no keywords", agent.slug);
            for entry in &agent.knowledge_base {
                assert!(!entry.prompt.trim().is_empty());
                assert!(!entry.answer.trim().is_empty());
            }
        }
    }
}

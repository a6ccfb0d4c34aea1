//! General assistant resolution
//!
//! The global surface answers from a literal quick-response table and,
//! independently, tries to route the question to a specialist agent by
//! scanning the directory for name or keyword hits. Both signals feed a
//! fixed-priority response synthesis.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::agent::{catalog, get_agent_by_slug, Accent, Agent};

use super::normalize::fold_diacritics;

/// Number of quick-response prompts surfaced as suggestions
const SUGGESTED_PROMPT_COUNT: usize = 6;

/// One curated shortcut answer, optionally pointing at a specialist
#[derive(Debug, Clone, Deserialize)]
pub struct QuickResponse {
    pub prompt: String,
    pub answer: String,
    /// Slug of the agent that owns this topic, when one exists
    #[serde(default)]
    pub agent: Option<String>,
}

/// Lightweight projection of a matched agent, enough for the caller to
/// render a routing card without the full record
#[derive(Debug, Clone, Serialize)]
pub struct SuggestedAgent {
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub call_to_action: String,
    pub accent: Accent,
}

impl From<&Agent> for SuggestedAgent {
    fn from(agent: &Agent) -> Self {
        Self {
            slug: agent.slug.clone(),
            name: agent.name.clone(),
            tagline: agent.tagline.clone(),
            call_to_action: agent.call_to_action.clone(),
            accent: agent.accent.clone(),
        }
    }
}

/// A synthesized general-assistant reply
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub text: String,
    pub suggested_agent: Option<SuggestedAgent>,
}

const QUICK_RESPONSES_YAML: &str = include_str!("../../assets/quick_responses.yaml");

// Keyed by the diacritics-folded prompt; authoring order preserved so the
// leading entries double as the displayed quick prompts.
static QUICK_RESPONSES: Lazy<IndexMap<String, QuickResponse>> = Lazy::new(|| {
    let entries: Vec<QuickResponse> =
        serde_yaml::from_str(QUICK_RESPONSES_YAML).expect("embedded quick-response table is valid YAML");

    entries
        .into_iter()
        .map(|entry| (fold_diacritics(&entry.prompt), entry))
        .collect()
});

/// The literal prompts suggested to the user, in authoring order.
pub fn quick_prompts() -> Vec<&'static str> {
    QUICK_RESPONSES
        .values()
        .take(SUGGESTED_PROMPT_COUNT)
        .map(|entry| entry.prompt.as_str())
        .collect()
}

fn quick_response_for(question: &str) -> Option<&'static QuickResponse> {
    QUICK_RESPONSES.get(&fold_diacritics(question))
}

/// Find the specialist agent for a question: the quick-response pointer
/// wins, otherwise the first directory entry whose normalized name or
/// any normalized keyword is contained in the folded question.
pub fn resolve_agent(question: &str) -> Option<&'static Agent> {
    let normalized = fold_diacritics(question);

    if let Some(quick) = quick_response_for(question) {
        if let Some(slug) = &quick.agent {
            if let Some(agent) = get_agent_by_slug(slug) {
                return Some(agent);
            }
        }
    }

    catalog::directory().iter().find(|agent| {
        if normalized.contains(&fold_diacritics(&agent.name)) {
            return true;
        }

        agent
            .keywords
            .iter()
            .any(|keyword| normalized.contains(&fold_diacritics(keyword)))
    })
}

/// Synthesize the general assistant's reply. Deterministic, never fails,
/// always returns non-empty text.
pub fn synthesize(question: &str) -> Reply {
    let quick_answer = quick_response_for(question).map(|entry| entry.answer.as_str());
    let matched_agent = resolve_agent(question);
    let suggested_agent = matched_agent.map(SuggestedAgent::from);

    let text = match (quick_answer, matched_agent) {
        (Some(answer), Some(agent)) => format!(
            "{} Se preferir, posso conectar você rapidamente ao agente {} para continuar a tratativa.",
            answer, agent.name
        ),
        (Some(answer), None) => answer.to_string(),
        (None, Some(agent)) => format!(
            "Percebi que essa demanda conversa com {}. Posso encaminhar você para o agente especializado ou seguir com orientações gerais por aqui.",
            agent.name
        ),
        (None, None) => {
            let trimmed = question.trim();
            if trimmed.is_empty() {
                "Estou pronta para receber sua dúvida.".to_string()
            } else {
                format!("Vamos avançar juntos nessa dúvida sobre \"{trimmed}\". Conte mais detalhes ou envie anexos se precisar.")
            }
        }
    };

    Reply { text, suggested_agent }
}

//! Per-agent knowledge-base scoring
//!
//! Ranks an agent's curated prompt/answer entries against a free-text
//! question using two heuristics that share a single running best:
//!
//! - containment: the normalized question contains the whole normalized
//!   prompt, scoring twice the prompt's word count;
//! - token overlap: each prompt token longer than 3 chars adds 2 when it
//!   appears as a substring of the question, plus 1 more when it is an
//!   exact member of the question's token set.
//!
//! An entry that matches by containment does not also accumulate token
//! overlap, so a later entry can overtake via either rule. Below the
//! selection threshold the agent falls back to its focus areas and first
//! Protheus routine.

use crate::agent::Agent;

use super::normalize::normalize;

/// Minimum best score for a knowledge entry to be selected
const SCORE_THRESHOLD: u32 = 2;

/// Tokens of this length or shorter carry no signal for the overlap rule
const MAX_NOISE_TOKEN_LEN: usize = 3;

/// Answer a question from one agent's knowledge base. Deterministic,
/// never fails, always returns a non-empty response.
pub fn answer_question(question: &str, agent: &Agent) -> String {
    let normalized_question = normalize(question);

    let mut best_score = 0u32;
    let mut selected_answer: Option<&str> = None;

    for entry in &agent.knowledge_base {
        let normalized_prompt = normalize(&entry.prompt);
        if normalized_prompt.is_empty() {
            continue;
        }

        if normalized_question.contains(&normalized_prompt) {
            let bonus = normalized_prompt.split(' ').count() as u32 * 2;
            if bonus > best_score {
                best_score = bonus;
                selected_answer = Some(&entry.answer);
            }
            continue;
        }

        let prompt_tokens: Vec<&str> = normalized_prompt
            .split(' ')
            .filter(|token| token.chars().count() > MAX_NOISE_TOKEN_LEN)
            .collect();

        let mut score = 0u32;
        for token in &prompt_tokens {
            if normalized_question.contains(token) {
                score += 2;
            }
        }

        let question_tokens: Vec<&str> = normalized_question
            .split(' ')
            .filter(|token| token.chars().count() > MAX_NOISE_TOKEN_LEN)
            .collect();

        for token in &prompt_tokens {
            if question_tokens.contains(token) {
                score += 1;
            }
        }

        if score > best_score {
            best_score = score;
            selected_answer = Some(&entry.answer);
        }
    }

    if let Some(answer) = selected_answer {
        if best_score >= SCORE_THRESHOLD {
            return format!("{}{}", answer, complement_for(&normalized_question, agent));
        }
    }

    fallback_answer(agent)
}

/// Sentence appended to a selected answer: a keyword-specific checklist
/// offer when one of the agent's keywords appears in the question,
/// otherwise a generic attachments/forms offer.
fn complement_for(normalized_question: &str, agent: &Agent) -> String {
    let keyword_match = agent
        .keywords
        .iter()
        .find(|keyword| normalized_question.contains(&normalize(keyword)));

    match keyword_match {
        Some(keyword) => format!(" Se precisar, posso abrir um checklist específico para {keyword}."),
        None => " Caso precise de anexos ou formulários, me avise que sinalizo o caminho mais rápido.".to_string(),
    }
}

/// Composed when no knowledge entry clears the threshold: the agent's
/// first two focus areas, its first Protheus routine when present, and a
/// closing ask for context details. Non-empty parts joined by spaces.
fn fallback_answer(agent: &Agent) -> String {
    let primary_focus = agent.focus_areas.first().map(String::as_str).unwrap_or_default();
    let secondary_focus = agent.focus_areas.get(1).map(String::as_str).unwrap_or(primary_focus);

    let mut blocks = vec![format!(
        "Posso guiar suas demandas relacionadas a {} e {}.",
        primary_focus.to_lowercase(),
        secondary_focus.to_lowercase()
    )];

    if let Some(highlight) = agent.protheus_functions.first() {
        blocks.push(format!(
            "Quando precisar aplicar no Protheus, comece pela rotina {} ({}).",
            highlight.code, highlight.title
        ));
    }

    blocks.push(
        "Compartilhe detalhes como unidade, período e responsáveis para receber orientações personalizadas e modelos de comunicação."
            .to_string(),
    );

    blocks.join(" ")
}

//! Simulated chat presentation
//!
//! Greeting copy and the typed-out reveal. The reveal fakes the feel of
//! a live assistant: a short "thinking" delay, then the response printed
//! in fixed-interval chunks. All timing lives here, outside the resolver
//! core, and collapses to a plain print when animation is off.

use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use terminal_size::{terminal_size, Width};

use crate::agent::Agent;
use crate::config::ChatConfig;

/// Opening line of a per-agent session
pub fn agent_greeting(agent: &Agent) -> String {
    format!(
        "Olá! Eu sou o agente {}. Conte comigo para tratar de {} e todas as rotinas ligadas a {}.",
        agent.name,
        agent.tagline.to_lowercase(),
        agent.name
    )
}

/// Opening line of the general assistant session
pub fn general_greeting() -> String {
    "Estou pronta para receber sua dúvida.".to_string()
}

/// Prints assistant replies, optionally with the simulated typing reveal
pub struct Typist {
    delay: Duration,
    interval: Duration,
    steps: usize,
    animate: bool,
}

impl Typist {
    pub fn new(config: &ChatConfig, quiet: bool) -> Self {
        Self {
            delay: Duration::from_millis(config.response_delay_ms),
            interval: Duration::from_millis(config.reveal_interval_ms),
            steps: config.reveal_steps.max(1),
            animate: config.animate && !quiet && io::stdout().is_terminal(),
        }
    }

    /// Print a labeled reply. With animation on, waits the response delay
    /// and reveals the text chunk by chunk on char boundaries.
    pub fn say(&self, label: &str, text: &str) {
        println!("{}", label.bold().magenta());

        if !self.animate {
            println!("{}", wrap_text(text));
            println!();
            return;
        }

        thread::sleep(self.delay);

        let chars: Vec<char> = text.chars().collect();
        let step = (chars.len() + self.steps - 1) / self.steps;
        let step = step.max(1);

        let mut out = io::stdout();
        for chunk in chars.chunks(step) {
            let piece: String = chunk.iter().collect();
            print!("{piece}");
            let _ = out.flush();
            thread::sleep(self.interval);
        }
        println!();
        println!();
    }
}

/// Wrap response text to the terminal width for the non-animated path.
/// The animated path prints raw so chunk boundaries stay invisible.
fn wrap_text(text: &str) -> String {
    let width = terminal_size().map(|(Width(w), _)| w as usize).unwrap_or(80);
    let width = width.clamp(40, 120);

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::get_agent_by_slug;

    #[test]
    fn test_agent_greeting_lowercases_tagline() {
        let agent = get_agent_by_slug("financeiro").expect("known slug");
        let greeting = agent_greeting(agent);
        assert_eq!(
            greeting,
            "Olá! Eu sou o agente Financeiro. Conte comigo para tratar de fluxo de caixa e conciliações e todas as rotinas ligadas a Financeiro."
        );
    }

    #[test]
    fn test_wrap_text_respects_word_boundaries() {
        let wrapped = wrap_text(&"palavra ".repeat(40));
        for line in wrapped.lines() {
            assert!(line.chars().count() <= 120);
            assert!(!line.starts_with(' '));
            assert!(!line.ends_with(' '));
        }
    }

    #[test]
    fn test_wrap_text_short_input_is_unchanged() {
        assert_eq!(wrap_text("curto e direto"), "curto e direto");
    }
}

//! Interactive chat sessions

use std::io::{self, BufRead, Write};

use colored::*;
use eyre::{Context, Result};

use crate::agent::{catalog, get_agent_by_slug, Agent};
use crate::chat::{agent_greeting, general_greeting, Typist};
use crate::config::Config;
use crate::resolver::{global, knowledge, normalize};

// Session-ending words, checked after diacritics folding
const EXIT_WORDS: [&str; 3] = ["sair", "exit", "quit"];

pub fn run(agent_slug: Option<&str>, quiet: bool, config: &Config) -> Result<()> {
    let typist = Typist::new(&config.chat, quiet);

    match agent_slug {
        Some(slug) => {
            let Some(agent) = get_agent_by_slug(slug) else {
                eprintln!("{} Agent '{}' not found", "✗".red(), slug);
                eprintln!();
                eprintln!("Available agents:");
                for agent in catalog::directory() {
                    eprintln!("  {}", agent.slug);
                }
                return Ok(());
            };
            agent_session(agent, quiet, &typist)
        }
        None => general_session(quiet, &typist),
    }
}

fn agent_session(agent: &Agent, quiet: bool, typist: &Typist) -> Result<()> {
    log::info!("Starting chat session with agent '{}'", agent.slug);

    typist.say(&agent.name, &agent_greeting(agent));

    if !quiet && !agent.shortcuts.is_empty() {
        println!("{}", "Atalhos:".bold());
        for shortcut in &agent.shortcuts {
            println!("  {} {}", "•".cyan(), shortcut);
        }
        println!();
    }

    while let Some(question) = read_question()? {
        let trimmed = question.trim();

        if trimmed.is_empty() {
            continue;
        }
        if is_exit_word(trimmed) {
            break;
        }

        typist.say(&agent.name, &knowledge::answer_question(trimmed, agent));
    }

    Ok(())
}

fn general_session(quiet: bool, typist: &Typist) -> Result<()> {
    log::info!("Starting general chat session");

    typist.say("Sophia", &general_greeting());

    if !quiet {
        println!("{}", "Sugestões:".bold());
        for prompt in global::quick_prompts() {
            println!("  {} {}", "•".cyan(), prompt);
        }
        println!();
    }

    while let Some(question) = read_question()? {
        let trimmed = question.trim();

        if trimmed.is_empty() {
            continue;
        }
        if is_exit_word(trimmed) {
            break;
        }

        let reply = global::synthesize(trimmed);
        typist.say("Sophia", &reply.text);

        if let Some(suggested) = reply.suggested_agent {
            println!(
                "  {} {}: {}",
                "↪".cyan(),
                suggested.call_to_action,
                format!("concierge chat --agent {}", suggested.slug).cyan()
            );
            println!();
        }
    }

    Ok(())
}

/// Read one line from stdin after printing the prompt; None on EOF
fn read_question() -> Result<Option<String>> {
    print!("{} ", ">".dimmed());
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input))
}

fn is_exit_word(input: &str) -> bool {
    let folded = normalize::fold_diacritics(input);
    EXIT_WORDS.contains(&folded.as_str())
}

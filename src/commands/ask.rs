//! One-shot question answering

use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::agent::{catalog, get_agent_by_slug};
use crate::cli::OutputFormat;
use crate::resolver::{global, knowledge};

pub fn run(question: &str, agent_slug: Option<&str>, format: OutputFormat) -> Result<()> {
    match agent_slug {
        Some(slug) => ask_agent(question, slug, format),
        None => ask_general(question, format),
    }
}

fn ask_agent(question: &str, slug: &str, format: OutputFormat) -> Result<()> {
    let Some(agent) = get_agent_by_slug(slug) else {
        eprintln!("{} Agent '{}' not found", "✗".red(), slug);
        eprintln!();
        eprintln!("Available agents:");
        for agent in catalog::directory() {
            eprintln!("  {}", agent.slug);
        }
        return Ok(());
    };

    log::info!("Asking agent '{}': {}", agent.slug, question);
    let answer = knowledge::answer_question(question, agent);

    #[derive(Serialize)]
    struct AgentAnswer<'a> {
        agent: &'a str,
        question: &'a str,
        answer: String,
    }

    let reply = AgentAnswer {
        agent: &agent.slug,
        question,
        answer,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reply)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&reply)?),
        OutputFormat::Text => {
            println!("{}", agent.name.bold().magenta());
            println!("{}", reply.answer);
        }
    }

    Ok(())
}

fn ask_general(question: &str, format: OutputFormat) -> Result<()> {
    log::info!("Asking general assistant: {}", question);
    let reply = global::synthesize(question);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reply)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&reply)?),
        OutputFormat::Text => {
            println!("{}", "Sophia".bold().magenta());
            println!("{}", reply.text);
            if let Some(ref suggested) = reply.suggested_agent {
                println!();
                println!(
                    "  {} {}: {}",
                    "↪".cyan(),
                    suggested.call_to_action,
                    format!("concierge chat --agent {}", suggested.slug).cyan()
                );
            }
        }
    }

    Ok(())
}

//! Agent directory commands

use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::agent::{catalog, get_agent_by_slug};
use crate::cli::{AgentAction, OutputFormat};

pub fn run(action: AgentAction) -> Result<()> {
    match action {
        AgentAction::List { format } => list_agents(OutputFormat::resolve(format)),
        AgentAction::Show { slug, format } => show_agent(&slug, OutputFormat::resolve(format)),
        AgentAction::Shortcuts { slug } => show_shortcuts(&slug),
    }
}

fn list_agents(format: OutputFormat) -> Result<()> {
    let agents = catalog::directory();

    #[derive(Serialize)]
    struct AgentSummary<'a> {
        slug: &'a str,
        name: &'a str,
        tagline: &'a str,
        keywords: &'a [String],
    }

    let summaries: Vec<AgentSummary> = agents
        .iter()
        .map(|a| AgentSummary {
            slug: &a.slug,
            name: &a.name,
            tagline: &a.tagline,
            keywords: &a.keywords,
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&summaries)?),
        OutputFormat::Text => {
            println!("{}", "Available Agents:".bold());
            println!();

            for agent in agents {
                println!("  {} {} {}", "●".green(), agent.name.bold(), format!("({})", agent.slug).dimmed());
                println!("    {}", agent.tagline.dimmed());
                if !agent.keywords.is_empty() {
                    println!("    Keywords: {}", agent.keywords.join(", ").cyan());
                }
                println!();
            }
        }
    }

    Ok(())
}

fn show_agent(slug: &str, format: OutputFormat) -> Result<()> {
    let Some(agent) = get_agent_by_slug(slug) else {
        eprintln!("{} Agent '{}' not found", "✗".red(), slug);
        eprintln!();
        eprintln!("Available agents:");
        for agent in catalog::directory() {
            eprintln!("  {}", agent.slug);
        }
        return Ok(());
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(agent)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(agent)?),
        OutputFormat::Text => {
            println!("{} {}", "Agent:".bold(), agent.name.green().bold());
            println!("{}", agent.tagline.italic());
            println!();
            println!("{} {}", "Description:".bold(), agent.description);
            println!();
            println!("{} {}", "Mission:".bold(), agent.mission);

            if !agent.focus_areas.is_empty() {
                println!();
                println!("{}", "Focus Areas:".bold());
                for area in &agent.focus_areas {
                    println!("  {} {}", "•".cyan(), area);
                }
            }

            if !agent.protheus_functions.is_empty() {
                println!();
                println!("{}", "Protheus Routines:".bold());
                for function in &agent.protheus_functions {
                    println!("  {} {} - {}", function.code.cyan().bold(), function.title, function.description.dimmed());
                }
            }

            if !agent.knowledge_base.is_empty() {
                println!();
                println!("{} {} entries", "Knowledge Base:".bold(), agent.knowledge_base.len());
            }

            println!();
            println!("{} {}", "Call to action:".bold(), agent.call_to_action.magenta());
        }
    }

    Ok(())
}

fn show_shortcuts(slug: &str) -> Result<()> {
    let Some(agent) = get_agent_by_slug(slug) else {
        eprintln!("{} Agent '{}' not found", "✗".red(), slug);
        return Ok(());
    };

    println!("{} {}", "Shortcuts for".bold(), agent.name.green().bold());
    println!();
    for shortcut in &agent.shortcuts {
        println!("  {} {}", "•".cyan(), shortcut);
    }

    Ok(())
}

//! Suggested quick prompts

use colored::*;
use eyre::Result;

use crate::cli::OutputFormat;
use crate::resolver::global;

pub fn run(format: OutputFormat) -> Result<()> {
    let prompts = global::quick_prompts();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&prompts)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&prompts)?),
        OutputFormat::Text => {
            println!("{}", "Quick prompts:".bold());
            println!();
            for prompt in prompts {
                println!("  {} {}", "•".cyan(), prompt);
            }
        }
    }

    Ok(())
}

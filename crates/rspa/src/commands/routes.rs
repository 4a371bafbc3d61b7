use anyhow::Result;
use colored::Colorize;
use rspa::{routes, Config};

pub fn execute(config: &Config) -> Result<()> {
    println!("{}", format!("Routes for {}", config.app.name).green().bold());
    println!();

    for route in routes() {
        let entry = if route.path() == config.app.entry_path {
            " (entry)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {}{}", route.path().cyan(), entry);
    }
    println!("  {} not found", "*".cyan());

    Ok(())
}

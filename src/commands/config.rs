use crate::core::Config;
use anyhow::{Context, Result};
use colored::Colorize;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => handle_show(),
        Some(("set", sub_matches)) => handle_set(sub_matches),
        Some(("reset", _)) => handle_reset(),
        _ => {
            println!("Use 'enginestats config --help' for more information.");
            Ok(())
        }
    }
}

fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let path = Config::get_config_path()?;

    println!("{}", format!("Config file: {}", path.display()).dimmed());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn handle_set(matches: &clap::ArgMatches) -> Result<()> {
    let key = matches
        .get_one::<String>("key")
        .context("Key argument is required")?;
    let value = matches
        .get_one::<String>("value")
        .context("Value argument is required")?;

    let mut config = Config::load()?;
    config.set_value(key, value)?;
    config.save()?;

    println!("{} {}", format!("✓ {} set to:", key).green(), value);
    Ok(())
}

fn handle_reset() -> Result<()> {
    Config::default().save()?;
    println!("{}", "✓ Configuration reset to defaults".green());
    Ok(())
}

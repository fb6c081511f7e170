//! Hardware tree dump command.

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::*;

use crate::core::config::Config;
use crate::platform::discover_tree;
use crate::ui::format_tree;

/// Execute the tree command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let mut tree = discover_tree(config.collect_gpu);

    tree.refresh().context("Failed to refresh hardware tree")?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(tree.roots())?);
        return Ok(());
    }

    println!("{}", "Hardware tree".bold());
    print!("{}", format_tree(tree.roots()));
    Ok(())
}

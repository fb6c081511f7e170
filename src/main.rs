use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, Command};

use enginestats::commands;

fn main() -> Result<()> {
    let matches = Command::new("enginestats")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Smoothed CPU, GPU and memory telemetry for the local machine")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("watch")
                .about("Sample continuously and print one line per interval")
                .arg(
                    Arg::new("interval")
                        .short('i')
                        .long("interval")
                        .value_name("MS")
                        .help("Sampling interval in milliseconds (minimum 1000)")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .value_name("N")
                        .help("Stop after N snapshots")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print snapshots as JSON lines")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("once")
                .about("Take a single reading")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the snapshot as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tree")
                .about("Show the hardware tree with current sensor values")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the tree as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage configuration (use 'enginestats config --help' for subcommands)")
                .arg_required_else_help(true)
                .subcommand(Command::new("show").about("Show the current configuration"))
                .subcommand(
                    Command::new("set")
                        .about("Change a setting, e.g. 'interval_ms 2000'")
                        .arg(Arg::new("key").help("Setting name").required(true))
                        .arg(Arg::new("value").help("New value").required(true)),
                )
                .subcommand(Command::new("reset").about("Restore default settings")),
        )
        .get_matches();

    enginestats::init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("watch", sub_matches)) => commands::watch(sub_matches),
        Some(("once", sub_matches)) => commands::once(sub_matches),
        Some(("tree", sub_matches)) => commands::tree(sub_matches),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        _ => {
            println!("Welcome to enginestats!");
            println!("Use 'enginestats --help' for more information.");
            Ok(())
        }
    }
}

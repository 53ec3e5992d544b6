use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use skillboard::commands::{snapshot_json, SkillCommand, SkillCommandBridge};
use skillboard::config::{load_from, load_or_default};
use skillboard::{ProfileStore, SkillListController};

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse()?;
    let config = match &args.config {
        Some(path) => load_from(path)?,
        None => load_or_default()?,
    };
    let store = ProfileStore::from_config(&config).into_shared();
    let mut controller = SkillListController::new(store);
    let mut bridge = SkillCommandBridge::new(&mut controller);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", bridge.execute(SkillCommand::Show)?)?;
    for line in stdin.lock().lines() {
        let line = line.context("Failed reading command from stdin")?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }
        match bridge.execute_line(&line) {
            Ok(output) => writeln!(stdout, "{output}")?,
            Err(err) => writeln!(stdout, "error: {err:#}")?,
        }
    }
    drop(bridge);

    if args.json {
        let payload = snapshot_json(&controller);
        writeln!(stdout, "{}", serde_json::to_string_pretty(&payload)?)?;
    }
    Ok(())
}

struct CliArgs {
    config: Option<PathBuf>,
    json: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut config = None;
        let mut json = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let value = args
                        .next()
                        .context("Expected a file path after --config")?;
                    config = Some(PathBuf::from(value));
                }
                "--json" => json = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self { config, json })
    }
}

fn print_usage() {
    println!("skillboard console");
    println!("Reads one skill-list command per line from stdin.");
    println!("Usage: cargo run --bin skills_console -- [options]");
    println!("Options:");
    println!("  --config <path>   Load configuration from a specific TOML file");
    println!("  --json            Print the final rows as JSON on exit");
    println!("Commands: toggle | select <row> | delete <row> | move <from> <to> | add <text> | cancel | show | quit");
}

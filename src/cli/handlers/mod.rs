use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::cli::script::{parse_script, run_action};
use crate::io::config_io;
use crate::io::logging::{LogTarget, init_logging};
use crate::model::config::AppConfig;
use crate::ops::board::Board;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = config_io::resolve_config_path(cli.config.as_deref());

    match cli.command {
        None => {
            // main.rs launches the TUI before dispatching
            Ok(())
        }
        Some(Commands::Run(args)) => {
            let config = config_io::load_config(&config_path)?;
            init_logging(&config.log, LogTarget::Stderr)?;
            cmd_run(args, &config)
        }
        Some(Commands::Config(cmd)) => cmd_config(cmd, &config_path),
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

fn read_script(file: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(|e| format!("could not read {}: {}", path.display(), e).into()),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn cmd_run(args: RunArgs, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_script(args.file.as_deref())?;
    let mut board = Board::new();
    let default_priority = config.defaults.priority;

    let mut executed = 0usize;
    let mut failures = 0usize;
    for (line, parsed) in parse_script(&text) {
        let verb = parsed.as_ref().map_or("?", |action| action.verb());
        let result = parsed.and_then(|action| run_action(&mut board, action, default_priority));
        executed += 1;

        if args.json {
            println!(
                "{}",
                serde_json::to_string(&action_to_json(line, verb, &result))?
            );
        } else {
            match &result {
                Ok(outcome) => {
                    for out in format_outcome(outcome) {
                        println!("{}", out);
                    }
                }
                Err(e) => eprintln!("{}", format_error(line, e)),
            }
        }

        if let Err(e) = &result {
            failures += 1;
            debug!(line, error = %e, "script line failed");
            if args.strict {
                return Err(format!("stopped at line {}", line).into());
            }
        }
    }

    info!(executed, failures, "script finished");
    Ok(())
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn cmd_config(cmd: ConfigCmd, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    match cmd.action {
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Show => {
            let config = config_io::load_config(path)?;
            print!("{}", config_io::render_config(&config)?);
        }
        ConfigAction::Set { key, value } => {
            let mut doc = config_io::read_config_document(path)?;
            config_io::set_value(&mut doc, &key, &value)?;
            config_io::validate(&doc, &key)?;
            config_io::write_config(path, &doc)?;
            println!("{} = {}", key, value);
        }
    }
    Ok(())
}

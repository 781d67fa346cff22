use anyhow::{Context, Result};
use input_selection_config::Config;
use input_selection_engine::{SelectionModel, char_len};
use std::{env, path::PathBuf, process};

mod ops;

use ops::{Op, describe};

fn print_usage(program_name: &str) {
    eprintln!("Usage: {program_name} <text-file> [op ...]");
    eprintln!();
    eprintln!("Operations:");
    eprintln!("  set:<pos>|<a>..<b>[:none|forward|backward]");
    eprintln!("  expand:<pos>|<a>..<b>");
    eprintln!("  end:<pos>");
    eprintln!("  offset:<delta>|<a>..<b>");
    eprintln!("  caret:<line>:<col>");
    eprintln!("  save");
    eprintln!("  restore");
    eprintln!();
    eprintln!("Or set default_file in {}", Config::config_path().display());
}

fn run(text_path: PathBuf, op_args: &[String], config: &Config) -> Result<()> {
    let text = std::fs::read_to_string(&text_path)
        .with_context(|| format!("Failed to read {}", text_path.display()))?;
    log::info!(
        "Loaded {} ({} chars)",
        text_path.display(),
        char_len(&text)
    );

    let ops = op_args
        .iter()
        .map(|arg| arg.parse::<Op>())
        .collect::<Result<Vec<_>>>()?;

    let mut selection = SelectionModel::new();

    if ops.is_empty() {
        // No operations: report the caret at the end of the text
        selection.set(char_len(&text) as isize);
        println!("{}", describe(&selection, &text, config.one_based));
        return Ok(());
    }

    for (arg, op) in op_args.iter().zip(&ops) {
        log::debug!("Applying {op:?}");
        op.apply(&mut selection, &text);
        println!("{arg}\t{}", describe(&selection, &text, config.one_based));
    }

    Ok(())
}

fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            Config::default()
        }
    };

    let default_level = config
        .log_level
        .as_deref()
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "input-selection-cli".to_string());

    let (text_path, op_args): (PathBuf, &[String]) = match args.get(1) {
        Some(flag) if flag == "-h" || flag == "--help" => {
            print_usage(&program_name);
            return Ok(());
        }
        Some(path) => (PathBuf::from(path), &args[2..]),
        None => match &config.default_file {
            Some(path) => {
                log::info!("Using default file from config: {}", path.display());
                (path.clone(), &[])
            }
            None => {
                eprintln!("Error: No text file provided and no default_file configured");
                print_usage(&program_name);
                process::exit(1);
            }
        },
    };

    run(text_path, op_args, &config)
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{
    args::{Command, ScanCommand},
    exit_status::ExitStatus,
    summary,
};
use crate::{
    config::{CONFIG_FILE_NAME, default_config_json, load_config},
    core::run_batch,
};

pub fn run(command: Command) -> Result<ExitStatus> {
    match command {
        Command::Scan(cmd) => scan_command(cmd),
        Command::Init => {
            init()?;
            println!("Created {}", CONFIG_FILE_NAME);
            Ok(ExitStatus::Success)
        }
    }
}

/// Configuration priority: CLI arguments > config file > defaults.
fn scan_command(ScanCommand { args }: ScanCommand) -> Result<ExitStatus> {
    let verbose = args.common.verbose;

    // CLI --source-root determines where the config file is searched for;
    // the config's own sourceRoot only applies when the flag is absent.
    let config_dir = args
        .common
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let config_result = load_config(&config_dir)?;
    if verbose && !config_result.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    let mut config = config_result.config;
    if let Some(source_root) = &args.common.source_root {
        config.source_root = source_root.to_string_lossy().into_owned();
    }
    if !args.components.is_empty() {
        config.components = Some(args.components.clone());
    }
    if args.include_sub_components {
        config.include_sub_components = true;
    }
    if let Some(imported_from) = &args.imported_from {
        config.imported_from = Some(imported_from.clone());
    }
    config.validate()?;

    let options = config.scan_options()?;
    let outcome = run_batch(&config, &options, verbose);

    let json = serde_json::to_string_pretty(&outcome.report)
        .context("Failed to serialize the report")?;
    match &args.output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?,
        None => println!("{}", json),
    }

    summary::print(&outcome, verbose);

    if !outcome.fatal_errors.is_empty() {
        Ok(ExitStatus::Error)
    } else if outcome.parse_failures > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}

use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "ledger.toml";
const ENV_PREFIX: &str = "LEDGER";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `tracing` filter directive, e.g. `info` or `ledger=debug`.
    pub log_level: String,
    /// Log destination. The terminal UI only logs when this is set.
    pub log_file: Option<String>,
    /// Prefix printed in front of the running balance.
    pub total_label: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_file: None,
            total_label: "Total: ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Subcommand)]
pub enum Mode {
    /// Interactive terminal widget (default).
    #[default]
    Tui,
    /// Line-oriented command prompt.
    Shell,
}

#[derive(Debug, Parser)]
#[command(name = "ledger", about = "In-memory income/expense ledger")]
pub struct Args {
    #[command(subcommand)]
    pub mode: Option<Mode>,
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,
    /// Override log filter.
    #[arg(long)]
    pub log_level: Option<String>,
    /// Write logs to this file.
    #[arg(long)]
    pub log_file: Option<String>,
    /// Override the label shown before the total.
    #[arg(long)]
    pub total_label: Option<String>,
}

pub fn load() -> Result<(Mode, AppConfig)> {
    let args = Args::parse();
    let mode = args.mode.unwrap_or_default();
    Ok((mode, resolve(args)?))
}

/// Layers defaults, the config file, `LEDGER_*` environment variables and
/// finally command-line flags.
pub fn resolve(args: Args) -> Result<AppConfig> {
    resolve_with_env(args, config::Environment::with_prefix(ENV_PREFIX))
}

fn resolve_with_env(args: Args, env: config::Environment) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let settings: AppConfig = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(env)
        .build()?
        .try_deserialize()?;

    Ok(apply_overrides(settings, args))
}

fn apply_overrides(mut settings: AppConfig, args: Args) -> AppConfig {
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }
    if let Some(total_label) = args.total_label {
        settings.total_label = total_label;
    }
    settings
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use trainmeter::config::AppConfig;
use trainmeter::demo::sample_activities;
use trainmeter::export::{self, ExportFormat};
use trainmeter::logging::{init_logging, LogLevel};
use trainmeter::{CaloriesCalculator, Locale, TrainMeterError, TrainingSummary};

/// TrainMeter - workout metrics calculator
///
/// Computes distance, mean speed and calories burned for running, walking
/// and swimming sessions and prints a summary for each.
#[derive(Parser)]
#[command(name = "trainmeter")]
#[command(author = "TrainMeter Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Workout metrics calculator", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of log output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print summaries for the built-in sample workouts
    Demo {
        /// Output format (text, json, table)
        #[arg(short = 'f', long)]
        format: Option<ExportFormat>,

        /// Label language (en, ru)
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(short, long)]
        show: bool,

        /// Write a default configuration file (default location if no path)
        #[arg(short, long, value_name = "FILE")]
        init: Option<Option<PathBuf>>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{}", failure_message(&err).red());
        std::process::exit(1);
    }
}

/// Log a failed command and build the one message shown to the user
fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<TrainMeterError>() {
        Some(train_err) => {
            if train_err.severity().to_tracing_level() == tracing::Level::WARN {
                tracing::warn!(error = %train_err, "Command failed");
            } else {
                tracing::error!(error = %train_err, "Command failed");
            }
            train_err.user_message()
        }
        None => {
            tracing::error!(error = %err, "Command failed");
            format!("Error: {:#}", err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.logging.level = LogLevel::from_verbosity(cli.verbose, config.logging.level);
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let command = cli.command.unwrap_or(Commands::Demo {
        format: None,
        locale: None,
        output: None,
    });

    match command {
        Commands::Demo {
            format,
            locale,
            output,
        } => {
            let format = format.unwrap_or(config.display.format);
            let locale = locale.unwrap_or(config.display.locale);
            tracing::info!(?format, ?locale, "Describing sample workouts");

            let summaries: Vec<TrainingSummary> = sample_activities(locale)?
                .iter()
                .map(|activity| activity.summarize())
                .collect();

            match output {
                Some(path) => {
                    export::export_summaries(&summaries, format, locale, &path)?;
                    eprintln!(
                        "{}",
                        format!("✓ Wrote {} summaries to {}", summaries.len(), path.display())
                            .green()
                    );
                }
                None => print!("{}", export::render_summaries(&summaries, format, locale)?),
            }
        }

        Commands::Config { show, init } => {
            if let Some(target) = init {
                let path = target.unwrap_or_else(AppConfig::default_config_path);
                AppConfig::default().save_to_file(&path)?;
                eprintln!(
                    "{}",
                    format!("✓ Default configuration written to {}", path.display()).green()
                );
            } else if show {
                print!("{}", config.to_toml()?);
            } else {
                eprintln!("{}", "Nothing to do: pass --show or --init".yellow());
            }
        }
    }

    Ok(())
}

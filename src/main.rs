//! pico-spec - minimal hierarchical test runner
//!
//! Runs one of the bundled demonstration suites and renders the report.
//!
//! ## Usage
//!
//! ```bash
//! # Run the showcase suite with a live tree report
//! pico-spec run
//!
//! # Only passing tests, flat output without colors
//! pico-spec run --suite passing --format flat --no-color
//!
//! # Machine-readable report saved to a file
//! pico-spec run --format json-pretty --output report.json
//!
//! # Write a default configuration file
//! pico-spec config init
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

mod cli;

use cli::{Args, Command, ConfigAction, ConfigArgs, RunArgs};
use pico_spec::config::{AppConfig, EnvConfig};
use pico_spec::demo::DemoSuite;
use pico_spec::executor::{SuiteConfig, SuiteRunner};
use pico_spec::models::SuiteStatus;
use pico_spec::output::{reporter_for, write_report_to_file, ResultFormatter};
use pico_spec::utils::init_logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    init_logger(config.level());

    match args.command {
        Command::Run(run_args) => {
            if run_suite(run_args, config).await? == SuiteStatus::Failed {
                std::process::exit(1);
            }
        }
        Command::Config(config_args) => {
            manage_config(config_args, &config)?;
        }
    }

    Ok(())
}

/// Defaults, then config file, then environment, then global CLI flags
fn load_config(args: &Args) -> Result<AppConfig> {
    let env = EnvConfig::load();

    let path = args
        .config
        .clone()
        .or_else(|| env.config_file.as_ref().map(PathBuf::from));

    let mut config = match path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_default()?,
    };

    config.merge_env(&env);
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }

    config.validate()?;
    Ok(config)
}

async fn run_suite(args: RunArgs, mut config: AppConfig) -> Result<SuiteStatus> {
    if let Some(format) = args.format {
        config.format = format;
    }
    if args.quiet {
        config.log = false;
    }
    if args.no_color {
        config.color = false;
    }
    if args.output.is_some() {
        config.output = args.output;
    }
    config.validate()?;

    let suite = DemoSuite::from_str(&args.suite)
        .ok_or_else(|| anyhow::anyhow!("Unknown suite: {}", args.suite))?;

    let format = config.output_format();
    let formatter = ResultFormatter::new(format).with_color(config.color);
    let streaming = config.log && format.is_streaming();

    let suite_config = SuiteConfig::new()
        .with_log(streaming)
        .with_shared_logger(reporter_for(format, config.color));

    info!("Running {:?} suite ({} output)", suite, format.name());
    let report = SuiteRunner::new(suite_config).run(suite.tests()).await;

    if !format.is_streaming() {
        println!("{}", formatter.format_report(&report));
    } else if !streaming {
        println!("{}", formatter.format_footer(&report));
    }

    if let Some(path) = &config.output {
        write_report_to_file(path, &report, format)?;
        info!("Report written to {}", path.display());
    }

    Ok(report.status())
}

fn manage_config(args: ConfigArgs, config: &AppConfig) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let content = serde_yaml::to_string(config).context("Failed to serialize config")?;
            println!("{content}");

            let env = EnvConfig::load();
            if env.has_any() {
                env.print_summary();
            }
        }
        ConfigAction::Init { path } => {
            AppConfig::default().save(&path)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }

    Ok(())
}

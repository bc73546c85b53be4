pub mod commands;
pub mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use shopfront_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use shopfront_core::Dataset;
use tracing::info;

use commands::CommandResult;

#[derive(Debug, Parser)]
#[command(
    name = "shopfront",
    about = "Storefront catalog and order lookup CLI",
    long_about = "Browse the product catalog, filter by category and search term, and look up orders by customer phone number against the static dataset.",
    after_help = "Examples:\n  shopfront catalog\n  shopfront catalog --category drinks --search tra\n  shopfront find-order 0901234567"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to shopfront.toml")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Dataset directory (overrides config)")]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Render the product catalog, grouped by category or filtered")]
    Catalog {
        #[arg(long, default_value = "all", help = "Category id, or `all` for every category")]
        category: String,
        #[arg(long, default_value = "", help = "Case-insensitive name search")]
        search: String,
    },
    #[command(about = "Look up orders by customer phone number")]
    FindOrder {
        #[arg(help = "Phone number; formatting characters are ignored")]
        phone: String,
    },
    #[command(about = "List the category tab bar contents")]
    Categories,
    #[command(about = "Inspect effective configuration values")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config, cli.data_dir) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    let result = dispatch(cli.command, &config);
    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn dispatch(command: Command, config: &AppConfig) -> CommandResult {
    match command {
        Command::Config => commands::config::run(config),
        Command::Catalog { category, search } => with_dataset(config, |dataset| {
            commands::catalog::run(dataset, &category, &search)
        }),
        Command::FindOrder { phone } => {
            with_dataset(config, |dataset| commands::find_order::run(dataset, &phone))
        }
        Command::Categories => with_dataset(config, commands::categories::run),
    }
}

fn with_dataset(
    config: &AppConfig,
    run: impl FnOnce(&Dataset) -> CommandResult,
) -> CommandResult {
    match Dataset::load(&config.data.dir) {
        Ok(dataset) => run(&dataset),
        Err(error) => CommandResult::failure(error.to_string(), 2),
    }
}

fn load_config(
    config_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> Result<AppConfig, String> {
    AppConfig::load(LoadOptions {
        require_file: config_path.is_some(),
        config_path,
        overrides: ConfigOverrides { data_dir, ..ConfigOverrides::default() },
    })
    .map_err(|error| error.to_string())
}

fn init_logging(config: &AppConfig) {
    use shopfront_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .with_writer(std::io::stderr)
                .compact()
                .init();
        }
        Pretty => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .with_writer(std::io::stderr)
                .pretty()
                .init();
        }
        Json => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .with_writer(std::io::stderr)
                .json()
                .init();
        }
    }

    info!(
        event_name = "cli.start",
        data_dir = %config.data.dir.display(),
        "shopfront CLI initialized"
    );
}

//! Zipcast CLI - weather by postal code
//!
//! Resolves each query against one in-process resolver, so repeated
//! equivalent queries are served from the cache.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use zipcast_core::{App, AppError, Config};

#[derive(Debug, Parser)]
#[command(name = "zipcast", version, about = "Current weather and forecast by postal code")]
struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up weather for one or more `ZIP,COUNTRY` queries, e.g. `10001,US`
    Lookup {
        #[arg(required = true, value_parser = parse_query)]
        queries: Vec<Query>,
    },
    /// Print the effective configuration
    Config,
}

#[derive(Debug, Clone)]
struct Query {
    zip: String,
    country: String,
}

fn parse_query(raw: &str) -> Result<Query, String> {
    let (zip, country) = raw
        .rsplit_once(',')
        .ok_or_else(|| format!("expected ZIP,COUNTRY, got '{}'", raw))?;
    Ok(Query {
        zip: zip.to_string(),
        country: country.to_string(),
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = zipcast_core::init() {
        eprintln!("{}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e.user_message());
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Lookup { queries } => {
            let app = App::new(cli.config.as_deref())?;
            for query in queries {
                let resolved = app.lookup(&query.zip, &query.country).await?;
                println!("X-Cache: {}", resolved.cache_status());
                println!(
                    "{}",
                    serde_json::to_string_pretty(&resolved.response)
                        .map_err(|e| AppError::Other(e.into()))?
                );
            }
            tracing::debug!(
                "{} responses cached",
                app.resolver().cache().entry_count()
            );
            Ok(())
        }
        Command::Config => {
            let (config, validation) = Config::load_validated(cli.config.as_deref())?;
            println!("{}", config.to_toml()?);
            for warning in &validation.warnings {
                eprintln!("warning: {}", warning);
            }
            Ok(())
        }
    }
}

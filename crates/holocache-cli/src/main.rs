//! holocache - fetch and display one Star Wars API record, cached locally.
//!
//! ```bash
//! holocache character 1
//! holocache planet 3 --json
//! holocache --clear-cache
//! ```

mod render;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use holocache_core::{ApiClient, CacheKey, Config, FileCache, RecordFetcher};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "holocache",
    about = "Fetch a Star Wars API record, caching it locally",
    version
)]
struct Cli {
    /// Entity type: character, planet or starship
    #[arg(required_unless_present = "clear_cache")]
    type_name: Option<String>,

    /// Entity id
    #[arg(required_unless_present = "clear_cache")]
    id: Option<String>,

    /// Print the normalized record as JSON
    #[arg(long)]
    json: bool,

    /// Remove every cached record and exit
    #[arg(long, conflicts_with_all = ["type_name", "id", "json"])]
    clear_cache: bool,
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_tracing();

    let config = Config::load()?;
    let cache = Arc::new(FileCache::new(config.cache_dir()?)?);

    if cli.clear_cache {
        let removed = cache.clear().context("Failed to clear cache")?;
        println!("Removed {} cached record(s) from {}", removed, cache.cache_dir().display());
        return Ok(ExitCode::SUCCESS);
    }

    // clap guarantees both positionals unless --clear-cache was given
    let (Some(type_name), Some(id)) = (cli.type_name, cli.id) else {
        return Ok(ExitCode::from(2));
    };

    let client = ApiClient::with_timeout(config.request_timeout())?;
    let fetcher = RecordFetcher::new(cache.clone(), Arc::new(client))
        .with_base_url(config.base_url());

    info!(type_name = %type_name, id = %id, base_url = fetcher.base_url(), "Fetching record");

    match fetcher.fetch_record(&type_name, &id).await {
        Ok(record) if cli.json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(record) => {
            let age = cache.age_display(&CacheKey::new(&type_name, &id));
            print!("{}", render::render_record(&type_name, &record, age.as_deref()));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprint!("{}", render::render_error(&type_name, &id, &e));
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["holocache", "planet", "1", "--json"]).unwrap();
        assert_eq!(cli.type_name.as_deref(), Some("planet"));
        assert_eq!(cli.id.as_deref(), Some("1"));
        assert!(cli.json);
        assert!(!cli.clear_cache);
    }

    #[test]
    fn test_parse_clear_cache() {
        let cli = Cli::try_parse_from(["holocache", "--clear-cache"]).unwrap();
        assert!(cli.clear_cache);
        assert!(cli.type_name.is_none());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["holocache", "planet", "1", "--jsno"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let err = Cli::try_parse_from(["holocache", "planet"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(Cli::try_parse_from(["holocache"]).is_err());
    }

    #[test]
    fn test_clear_cache_conflicts_with_record() {
        let err = Cli::try_parse_from(["holocache", "planet", "1", "--clear-cache"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_help_is_generated() {
        let err = Cli::try_parse_from(["holocache", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}

//! Command-line companion for til-random.
//!
//! Runs the same navigation flow as the HTTP service without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Print the destination of one random-entry request
//! cargo run --bin til-random-cli -- pick
//!
//! # Print it as an absolute URL
//! cargo run --bin til-random-cli -- pick --site https://til.example.com
//!
//! # Resolve a legacy Markdown link
//! cargo run --bin til-random-cli -- legacy python_dataclasses.md
//!
//! # Check the data API
//! cargo run --bin til-random-cli -- check
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_API_URL`, `DATA_API_DATABASE`: see [`til_random::config`]

use til_random::application::services::RandomEntryService;
use til_random::config;
use til_random::infrastructure::persistence::DatasetteEntryRepository;
use til_random::utils::legacy_path::parse_legacy_file;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;
use url::Url;

/// CLI tool for til-random.
#[derive(Parser)]
#[command(name = "til-random-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a random entry and print where it leads
    Pick {
        /// Site root to join the destination path onto
        #[arg(short, long)]
        site: Option<String>,
    },

    /// Print the redirect target of a legacy `{topic}_{slug}.md` file name
    Legacy {
        /// File name or path ending in the file name
        file: String,
    },

    /// Check that the data API is reachable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pick { site } => handle_pick(site.as_deref()).await?,
        Commands::Legacy { file } => handle_legacy(&file)?,
        Commands::Check => handle_check().await?,
    }

    Ok(())
}

fn build_repository() -> Result<DatasetteEntryRepository> {
    let config = config::load_from_env()?;

    DatasetteEntryRepository::new(&config.data_api_url, &config.data_api_database)
        .context("Failed to set up data API client")
}

async fn handle_pick(site: Option<&str>) -> Result<()> {
    let service = RandomEntryService::new(Arc::new(build_repository()?));

    let navigation = service.navigate_to_random_entry().await;
    let path = navigation.path();

    let destination = match site {
        Some(site) => destination_url(site, &path)?.to_string(),
        None => path,
    };

    if navigation.is_fallback() {
        println!("{} {}", "→".yellow(), destination.yellow());
    } else {
        println!("{} {}", "→".green(), destination.bold());
    }

    Ok(())
}

/// Joins a site path under the site root, keeping any base path of `site`.
///
/// `https://host/blog` + `/python/x` → `https://host/blog/python/x`
fn destination_url(site: &str, path: &str) -> Result<Url> {
    let mut base = Url::parse(site).with_context(|| format!("Invalid site URL: {site}"))?;
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }

    base.join(&format!("./{}", path.trim_start_matches('/')))
        .with_context(|| format!("Cannot join {path} onto {site}"))
}

fn handle_legacy(file: &str) -> Result<()> {
    let name = file.rsplit('/').next().unwrap_or(file);

    let entry = parse_legacy_file(name)
        .with_context(|| format!("Not a legacy entry file name: {name}"))?;

    println!("{} {}", "→".green(), entry.path().bold());

    Ok(())
}

async fn handle_check() -> Result<()> {
    let repository = build_repository()?;

    println!("Data API: {}", repository.query_url().as_str().dimmed());

    let service = RandomEntryService::new(Arc::new(repository));

    if service.health_check().await {
        println!("{}", "✓ Data API reachable".green());
        Ok(())
    } else {
        println!("{}", "✗ Data API unreachable".red());
        anyhow::bail!("data API health check failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_url_at_site_root() {
        let url = destination_url("https://til.example.com", "/python/dataclasses").unwrap();
        assert_eq!(url.as_str(), "https://til.example.com/python/dataclasses");
    }

    #[test]
    fn test_destination_url_keeps_base_path() {
        let url = destination_url("https://example.com/blog/", "/python/x").unwrap();
        assert_eq!(url.as_str(), "https://example.com/blog/python/x");

        let url = destination_url("https://example.com/blog", "/all").unwrap();
        assert_eq!(url.as_str(), "https://example.com/blog/all");
    }

    #[test]
    fn test_destination_url_topic_with_colon() {
        let url = destination_url("https://example.com/", "/c:x/slug").unwrap();
        assert_eq!(url.as_str(), "https://example.com/c:x/slug");
    }

    #[test]
    fn test_destination_url_invalid_site() {
        assert!(destination_url("not a url", "/all").is_err());
    }
}

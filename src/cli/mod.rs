//
//  instaapi
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod business;
mod completion;
mod config;
mod direct;
mod session;

pub use business::BusinessCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use direct::DirectCommand;
pub use session::SessionCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::{ApiError, InstaClient};
use crate::auth::SessionStore;
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

/// insta - Business account tools from the command line
#[derive(Parser, Debug)]
#[command(
    name = "insta",
    version,
    about = "Business account tools from the command line",
    long_about = "insta calls the private business API with an imported session.\n\n\
                  It shows account statistics and media insights, manages profile \
                  buttons and categories, and flags direct threads.",
    propagate_version = true,
    after_help = "Use 'insta <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Base URL of the REST API (overrides api.api_url)
    #[arg(long, global = true, env = "INSTA_API_URL")]
    pub api_url: Option<String>,

    /// Base URL of the business GraphQL endpoint (overrides api.graph_url)
    #[arg(long, global = true, env = "INSTA_GRAPH_URL")]
    pub graph_url: Option<String>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Business account statistics, insights, buttons and categories
    #[command(visible_alias = "biz")]
    Business(BusinessCommand),

    /// Direct thread flags
    #[command(visible_alias = "dm")]
    Direct(DirectCommand),

    /// Import, inspect and remove the stored session
    Session(SessionCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

impl GlobalOptions {
    /// Loads the configuration with command-line overrides applied.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load()?;
        if let Some(url) = &self.api_url {
            config.api.api_url = url.clone();
        }
        if let Some(url) = &self.graph_url {
            config.api.graph_url = url.clone();
        }
        Ok(config)
    }

    /// Output writer for `--json` or the configured `core.output`.
    pub fn writer(&self, config: &Config) -> OutputWriter {
        OutputWriter::new(OutputFormat::resolve(self.json, &config.core.output))
    }
}

/// Builds a client from the configuration and the stored session.
///
/// Fails with [`ApiError::AuthRequired`] when no session was imported.
pub(crate) fn build_client(config: &Config) -> Result<InstaClient> {
    let store = SessionStore::from_config(config)?;
    let stored = store
        .load()?
        .ok_or(ApiError::AuthRequired)
        .context("No session imported. Run 'insta session import <file>' first")?;

    tracing::debug!(username = %stored.session.username, "using stored session");
    InstaClient::from_config(&config.api, stored.device, stored.session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_after_subcommand() {
        let cli = Cli::try_parse_from([
            "insta",
            "business",
            "categories",
            "--parent",
            "2700",
            "--json",
            "--api-url",
            "http://127.0.0.1:1",
        ])
        .unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.api_url.as_deref(), Some("http://127.0.0.1:1"));
        assert!(matches!(cli.command, Commands::Business(_)));
    }

    #[test]
    fn test_validate_url_requires_app_id() {
        assert!(Cli::try_parse_from(["insta", "business", "validate-url", "https://example.com"]).is_err());
        assert!(Cli::try_parse_from(["insta", "business", "validate-url", "--app-id", "1", "not a url"]).is_err());
    }
}

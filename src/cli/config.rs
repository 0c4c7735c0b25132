//
//  instaapi
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Values are addressed by dotted key (`api.locale`, `core.output`, ...).
//! Endpoint overrides given with `--api-url`/`--graph-url` are not written
//! back; use `insta config set api.api_url <url>` to persist one.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;
use serde_json::json;

use crate::config::{Config, CONFIG_KEYS};
use crate::output::write_json;

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print a configuration value
    Get(KeyArgs),

    /// Change a configuration value
    Set(SetArgs),

    /// Restore the default value of a key
    Unset(KeyArgs),

    /// List every key with its current value
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Configuration key, e.g. `api.locale`
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key, e.g. `api.locale`
    pub key: String,

    /// New value
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => get(&args.key, global),
            ConfigSubcommand::Set(args) => set(args, global),
            ConfigSubcommand::Unset(args) => unset(&args.key, global),
            ConfigSubcommand::List => list(global),
            ConfigSubcommand::Path => path(global),
        }
    }
}

fn check_key(key: &str) -> Result<()> {
    if !CONFIG_KEYS.contains(&key) {
        bail!(
            "Unknown configuration key '{}'. Valid keys: {}",
            key,
            CONFIG_KEYS.join(", ")
        );
    }
    Ok(())
}

fn get(key: &str, global: &GlobalOptions) -> Result<()> {
    check_key(key)?;
    let value = Config::load()?.get(key);

    if global.json {
        return write_json(&json!({ "key": key, "value": value }));
    }
    if let Some(value) = value {
        println!("{}", value);
    }
    Ok(())
}

fn set(args: &SetArgs, global: &GlobalOptions) -> Result<()> {
    check_key(&args.key)?;
    let mut config = Config::load()?;
    config.set(&args.key, args.value.clone())?;
    config.save()?;

    if global.json {
        return write_json(&json!({ "key": args.key, "value": args.value }));
    }
    println!(
        "{} Set {} = {}",
        style("✓").green(),
        style(&args.key).cyan(),
        args.value
    );
    Ok(())
}

fn unset(key: &str, global: &GlobalOptions) -> Result<()> {
    check_key(key)?;
    let mut config = Config::load()?;
    config.unset(key)?;
    config.save()?;
    let value = config.get(key);

    if global.json {
        return write_json(&json!({ "key": key, "value": value }));
    }
    println!(
        "{} Reset {} to {}",
        style("✓").green(),
        style(key).cyan(),
        value.as_deref().unwrap_or("its default")
    );
    Ok(())
}

fn list(global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;

    if global.json {
        return write_json(&config);
    }
    for key in CONFIG_KEYS {
        println!(
            "{} = {}",
            style(key).cyan(),
            config.get(key).as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

fn path(global: &GlobalOptions) -> Result<()> {
    let config_path = Config::config_path()?;

    if global.json {
        return write_json(&json!({
            "path": config_path.display().to_string(),
            "exists": config_path.exists(),
        }));
    }
    println!("{}", config_path.display());
    Ok(())
}

//
//  instaapi
//  cli/session.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Session commands
//!
//! The CLI never logs in. A session exported by another tool is imported
//! once and reused by every command until `insta session logout`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;
use serde_json::json;

use crate::auth::{SessionStore, StoredSession};
use crate::config::read_config_file;
use crate::output::{print_field, write_json, OutputWriter};

use super::GlobalOptions;

/// Import, inspect and remove the stored session
#[derive(Args, Debug)]
pub struct SessionCommand {
    #[command(subcommand)]
    pub command: SessionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionSubcommand {
    /// Import a session exported as JSON
    Import(ImportArgs),

    /// Show the stored session
    Status(StatusArgs),

    /// Remove the stored session
    Logout,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Session JSON file (`-` for stdin)
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Show the authorization header (masked)
    #[arg(long)]
    pub show_token: bool,
}

impl SessionCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let writer = global.writer(&config);
        let store = SessionStore::from_config(&config)?;

        match &self.command {
            SessionSubcommand::Import(args) => import(&store, args, &writer),
            SessionSubcommand::Status(args) => status(&store, args, &writer),
            SessionSubcommand::Logout => logout(&store, &writer),
        }
    }
}

fn import(store: &SessionStore, args: &ImportArgs, writer: &OutputWriter) -> Result<()> {
    let content = if args.file.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read session from stdin")?
    } else {
        read_config_file(&args.file)?
    };

    let stored = StoredSession::parse_import(&content)?;
    let user = stored
        .session
        .validate()
        .context("The session is not logged in; export it after logging in")?
        .clone();
    store.save(&stored)?;

    if writer.is_json() {
        return write_json(&json!({
            "success": true,
            "username": user.username,
            "pk": user.pk,
            "path": store.path().display().to_string(),
        }));
    }
    println!(
        "{} Imported session for {}",
        style("✓").green(),
        style(format!("@{}", user.username)).cyan()
    );
    Ok(())
}

fn status(store: &SessionStore, args: &StatusArgs, writer: &OutputWriter) -> Result<()> {
    let Some(stored) = store.load()? else {
        if writer.is_json() {
            return write_json(&json!({ "logged_in": false }));
        }
        println!("No session imported");
        println!();
        println!("Run 'insta session import <file>' to add one");
        return Ok(());
    };

    let session = &stored.session;
    let device = &stored.device;
    let token = session.authorization.as_deref().map(mask_token);

    if writer.is_json() {
        return write_json(&json!({
            "logged_in": session.validate().is_ok(),
            "username": session.username,
            "user": session.logged_in_user,
            "device_id": device.device_id,
            "device": format!("{} {}", device.manufacturer, device.model),
            "authorization": if args.show_token { token } else { None },
        }));
    }

    let color = console::colors_enabled();
    println!("{}", style(format!("@{}", session.username)).bold());
    if let Some(user) = &session.logged_in_user {
        print_field("  User pk", &user.pk.to_string(), color);
    }
    print_field(
        "  Status",
        if session.validate().is_ok() { "Logged in" } else { "Not logged in" },
        color,
    );
    print_field(
        "  Device",
        &format!("{} {} ({})", device.manufacturer, device.model, device.device_id),
        color,
    );
    if args.show_token {
        print_field("  Authorization", token.as_deref().unwrap_or("-"), color);
    }
    Ok(())
}

fn logout(store: &SessionStore, writer: &OutputWriter) -> Result<()> {
    let removed = store.clear()?;

    if writer.is_json() {
        return write_json(&json!({ "success": removed }));
    }
    if removed {
        println!("{} Session removed", style("✓").green());
    } else {
        println!("No session imported");
    }
    Ok(())
}

fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("short"), "*****");
        assert_eq!(mask_token("Bearer IGT:2:abcdef"), "Bear...cdef");
    }
}

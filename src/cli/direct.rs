//
//  instaapi
//  cli/direct.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct thread commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;
use serde_json::json;

use crate::output::write_json;

use super::{build_client, GlobalOptions};

/// Direct thread flags
#[derive(Args, Debug)]
pub struct DirectCommand {
    #[command(subcommand)]
    pub command: DirectSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DirectSubcommand {
    /// Star a thread
    Star(ThreadArgs),

    /// Remove the star from a thread
    Unstar(ThreadArgs),
}

#[derive(Args, Debug)]
pub struct ThreadArgs {
    /// Thread id
    pub thread_id: String,
}

impl DirectCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let writer = global.writer(&config);
        let client = build_client(&config)?;
        let direct = client.direct();

        let (thread_id, starred) = match &self.command {
            DirectSubcommand::Star(args) => {
                direct
                    .star_thread(&args.thread_id)
                    .await
                    .with_context(|| format!("Failed to star thread {}", args.thread_id))?;
                (&args.thread_id, true)
            }
            DirectSubcommand::Unstar(args) => {
                direct
                    .unstar_thread(&args.thread_id)
                    .await
                    .with_context(|| format!("Failed to unstar thread {}", args.thread_id))?;
                (&args.thread_id, false)
            }
        };

        if writer.is_json() {
            return write_json(&json!({ "thread_id": thread_id, "starred": starred }));
        }
        let action = if starred { "Starred" } else { "Unstarred" };
        writer.write_success(&format!("{} thread {}", action, style(thread_id).cyan()));
        Ok(())
    }
}

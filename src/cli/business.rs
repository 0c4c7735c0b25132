//
//  instaapi
//  cli/business.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Business account commands
//!
//! Statistics and insights are printed as labelled fields followed by
//! tables; partners and categories as a single table. `--json` prints the
//! typed models unchanged.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;
use serde_json::json;
use url::Url;

use crate::api::business::{
    BusinessCategory, BusinessPartner, FullMediaInsights, InsightMetric, InsightsMedia,
    MediaInsights, Statistics,
};
use crate::api::media::{Media, MediaList, MediaType};
use crate::output::{
    data_points_table, format_bool, format_delta, print_field, print_header, write_json,
    TableBuilder, TableOutput,
};
use crate::util::{format_count, format_relative_time, format_time, truncate};

use super::{build_client, GlobalOptions};

/// Business account statistics, insights, buttons and categories
#[derive(Args, Debug)]
pub struct BusinessCommand {
    #[command(subcommand)]
    pub command: BusinessSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BusinessSubcommand {
    /// Show the account dashboard
    #[command(visible_alias = "statistics")]
    Stats,

    /// Show headline insights of a media
    Insights(InsightsArgs),

    /// Show full insights of a post
    FullInsights(FullInsightsArgs),

    /// List media that can be promoted
    Promotable,

    /// List partners available for profile buttons
    Buttons,

    /// Check a URL against a button partner
    ValidateUrl(ValidateUrlArgs),

    /// Remove the profile button
    RemoveButton,

    /// List business categories
    Categories(CategoriesArgs),

    /// List categories suggested for the account
    SuggestedCategories,
}

#[derive(Args, Debug)]
pub struct InsightsArgs {
    /// Media pk
    pub media_pk: String,
}

#[derive(Args, Debug)]
pub struct FullInsightsArgs {
    /// Media id as used by the insights GraphQL API
    pub media_id: String,
}

#[derive(Args, Debug)]
pub struct ValidateUrlArgs {
    /// App id of the partner (see `insta business buttons`)
    #[arg(long)]
    pub app_id: String,

    /// URL to validate
    pub url: Url,
}

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// List subcategories of this category instead of top-level ones
    #[arg(long, short = 'p')]
    pub parent: Option<String>,
}

impl BusinessCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let writer = global.writer(&config);
        let client = build_client(&config)?;
        let business = client.business();

        match &self.command {
            BusinessSubcommand::Stats => {
                let stats = business
                    .statistics()
                    .await
                    .context("Failed to fetch account statistics")?;
                writer.write(&stats)
            }
            BusinessSubcommand::Insights(args) => {
                let insights = business
                    .media_insights(&args.media_pk)
                    .await
                    .with_context(|| format!("Failed to fetch insights for {}", args.media_pk))?;
                writer.write(&insights)
            }
            BusinessSubcommand::FullInsights(args) => {
                let insights = business
                    .full_media_insights(&args.media_id)
                    .await
                    .with_context(|| format!("Failed to fetch insights for {}", args.media_id))?;
                writer.write(&insights)
            }
            BusinessSubcommand::Promotable => {
                let list = business
                    .promotable_media_feeds()
                    .await
                    .context("Failed to list promotable media")?;
                writer.write(&list)
            }
            BusinessSubcommand::Buttons => {
                let partners = business
                    .business_buttons()
                    .await
                    .context("Failed to list button partners")?;
                writer.write(&partners)
            }
            BusinessSubcommand::ValidateUrl(args) => {
                let partner = BusinessPartner::with_app_id(&args.app_id);
                let valid = business
                    .validate_url(&partner, &args.url)
                    .await
                    .with_context(|| format!("URL {} was rejected", args.url))?;
                if writer.is_json() {
                    write_json(&json!({ "url": args.url.as_str(), "valid": valid }))
                } else {
                    writer.write_success(&format!("{} is valid for app {}", args.url, args.app_id));
                    Ok(())
                }
            }
            BusinessSubcommand::RemoveButton => {
                let removed = business
                    .remove_business_button()
                    .await
                    .context("Failed to remove the profile button")?;
                if writer.is_json() {
                    write_json(&json!({ "success": removed }))
                } else {
                    writer.write_success("Profile button removed");
                    Ok(())
                }
            }
            BusinessSubcommand::Categories(args) => {
                let categories = match &args.parent {
                    Some(parent) => business.subcategories(parent).await,
                    None => business.categories().await,
                }
                .context("Failed to list categories")?;
                writer.write(&categories)
            }
            BusinessSubcommand::SuggestedCategories => {
                let categories = business
                    .suggested_categories()
                    .await
                    .context("Failed to list suggested categories")?;
                writer.write(&categories)
            }
        }
    }
}

// Display implementations

fn metric_row(name: &str, metric: &InsightMetric, color: bool) -> Vec<String> {
    vec![
        name.to_string(),
        format_count(metric.count),
        format_delta(metric.delta_from_last_week, color),
    ]
}

fn insights_media_table(media: &[InsightsMedia], color: bool) -> TableBuilder {
    let mut table = TableBuilder::new()
        .color(color)
        .headers(["Media", "Type", "Posted", "Impressions", "Reach", "Profile views"]);
    for item in media {
        table = table.row([
            item.instagram_media_id.clone().unwrap_or_else(|| item.id.clone()),
            item.media_type.clone().unwrap_or_else(|| "-".to_string()),
            item.created_at
                .as_ref()
                .map(format_relative_time)
                .unwrap_or_else(|| "-".to_string()),
            format_count(item.impressions),
            format_count(item.reach),
            format_count(item.profile_views),
        ]);
    }
    table.align_right(3).align_right(4).align_right(5)
}

impl TableOutput for Statistics {
    fn print_table(&self, color: bool) {
        let title = format!("@{}", self.username);
        print_header(&title);
        print_field(
            "Followers",
            &format!(
                "{} ({} this week)",
                format_count(self.followers_count),
                format_delta(self.followers_delta_from_last_week, color)
            ),
            color,
        );
        print_field(
            "Posts",
            &format!(
                "{} ({} this week)",
                format_count(self.posts_count),
                format_delta(self.posts_delta_from_last_week, color)
            ),
            color,
        );
        print_field("Stories last week", &format_count(self.last_week_stories_count), color);
        println!();

        TableBuilder::new()
            .color(color)
            .headers(["Metric", "This week", "Change"])
            .row(metric_row("Impressions", &self.impressions, color))
            .row(metric_row("Reach", &self.reach, color))
            .row(metric_row("Profile visits", &self.profile_visits, color))
            .row(metric_row("Website visits", &self.website_visits, color))
            .align_right(1)
            .align_right(2)
            .print();

        let demographics = [
            ("Gender", &self.followers.gender),
            ("Age", &self.followers.age),
            ("Top cities", &self.followers.top_cities),
            ("Top countries", &self.followers.top_countries),
        ];
        for (name, points) in demographics {
            if !points.is_empty() {
                println!();
                println!("{}", style(name).bold());
                println!("{}", data_points_table(points, "Followers", color));
            }
        }

        if !self.top_posts.is_empty() {
            println!();
            println!("{}", style("Top posts").bold());
            insights_media_table(&self.top_posts, color).print();
        }
        if !self.stories.is_empty() {
            println!();
            println!("{}", style("Stories").bold());
            insights_media_table(&self.stories, color).print();
        }
    }
}

impl TableOutput for MediaInsights {
    fn print_table(&self, color: bool) {
        print_field("Reach", &format_count(self.reach_count), color);
        print_field("Impressions", &format_count(self.impression_count), color);
        print_field("Engagement", &format_count(self.engagement_count), color);
        print_field("Average engagement", &format_count(self.avg_engagement_count), color);
    }
}

impl TableOutput for FullMediaInsights {
    fn print_table(&self, color: bool) {
        let title = format!(
            "{} {}",
            self.media_type.as_deref().unwrap_or("Media"),
            self.instagram_media_id.as_deref().unwrap_or(&self.id)
        );
        print_header(&title);
        if let Some(taken_at) = &self.taken_at {
            print_field("Posted", &format_time(taken_at), color);
        }
        if let Some(state) = &self.state {
            print_field("Insights", state, color);
        }
        print_field("Product tags", &format_bool(self.has_product_tags, color), color);
        println!();

        TableBuilder::new()
            .color(color)
            .headers([
                "Likes",
                "Comments",
                "Saves",
                "Shares",
                "Reach",
                "Impressions",
                "Profile views",
                "Follows",
            ])
            .row([
                format_count(self.like_count),
                format_count(self.comment_count),
                format_count(self.save_count),
                format_count(self.share_count),
                format_count(self.reach),
                format_count(self.impressions),
                format_count(self.profile_views),
                format_count(self.follows),
            ])
            .print();

        if !self.profile_actions.is_empty() {
            println!();
            println!("{}", style("Profile actions").bold());
            println!("{}", data_points_table(&self.profile_actions, "Count", color));
        }
        if !self.impression_sources.is_empty() {
            println!();
            println!("{}", style("Impression sources").bold());
            println!("{}", data_points_table(&self.impression_sources, "Impressions", color));
        }
    }
}

fn media_type_label(media: &Media) -> &'static str {
    match media.media_type {
        MediaType::Image => "image",
        MediaType::Video => "video",
        MediaType::Carousel => "carousel",
        MediaType::Unknown => "unknown",
    }
}

impl TableOutput for MediaList {
    fn print_table(&self, color: bool) {
        if self.medias.is_empty() {
            println!("No promotable media.");
            return;
        }

        let mut table = TableBuilder::new()
            .color(color)
            .headers(["PK", "Type", "Posted", "Likes", "Comments", "Caption"]);
        for media in &self.medias {
            table = table.row([
                media.pk.clone(),
                media_type_label(media).to_string(),
                media
                    .taken_at
                    .as_ref()
                    .map(format_relative_time)
                    .unwrap_or_else(|| "-".to_string()),
                format_count(media.like_count),
                format_count(media.comment_count),
                truncate(media.caption.as_deref().unwrap_or(""), 40),
            ]);
        }
        table.align_right(3).align_right(4).print();

        if self.more_available {
            let more = format!(
                "More results available (next max id {}).",
                self.next_max_id.as_deref().unwrap_or("-")
            );
            if color {
                println!("{}", style(more).dim());
            } else {
                println!("{}", more);
            }
        }
    }
}

impl TableOutput for Vec<BusinessPartner> {
    fn print_table(&self, color: bool) {
        if self.is_empty() {
            println!("No button partners available.");
            return;
        }

        let mut table = TableBuilder::new()
            .color(color)
            .headers(["App ID", "Partner", "Label", "Sample URL"]);
        for partner in self {
            table = table.row([
                partner.app_id.clone().unwrap_or_else(|| "-".to_string()),
                partner
                    .display_name
                    .clone()
                    .or_else(|| partner.partner_name.clone())
                    .unwrap_or_else(|| "-".to_string()),
                partner.label.clone().unwrap_or_default(),
                partner.sample_url.clone().unwrap_or_default(),
            ]);
        }
        table.print();
    }
}

impl TableOutput for Vec<BusinessCategory> {
    fn print_table(&self, color: bool) {
        if self.is_empty() {
            println!("No categories found.");
            return;
        }

        let mut table = TableBuilder::new().color(color).headers(["ID", "Name"]);
        for category in self {
            table = table.row([category.id.clone(), category.name.clone()]);
        }
        table.print();
    }
}

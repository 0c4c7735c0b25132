//
//  instaapi
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Formatting helpers used by the CLI output.
//!
//! ## Categories
//!
//! - **Number Utilities**: [`format_count`]
//! - **Time Utilities**: [`format_time`], [`format_relative_time`]
//! - **String Utilities**: [`truncate`]
//!
//! ## Example
//!
//! ```rust
//! use instaapi::util::{format_count, truncate};
//!
//! assert_eq!(format_count(1234567), "1,234,567");
//! assert_eq!(truncate("New summer collection", 10), "New sum...");
//! ```

use chrono::{DateTime, Local, Utc};

/// Formats a count with thousands separators.
///
/// # Example
///
/// ```rust
/// use instaapi::util::format_count;
///
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(12000), "12,000");
/// ```
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a UTC time as a local `YYYY-MM-DD HH:MM` string.
pub fn format_time(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Formats a time relative to now ("3 days ago").
///
/// # Notes
///
/// - Returns "just now" within the last 60 seconds and "in the future" for
///   times ahead of now.
/// - Months and years are approximated as 30 and 365 days.
pub fn format_relative_time(time: &DateTime<Utc>) -> String {
    relative_to(time, &Utc::now())
}

fn relative_to(time: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(*time).num_seconds();
    if diff < 0 {
        return "in the future".to_string();
    }

    let (value, unit) = match diff {
        d if d < 60 => return "just now".to_string(),
        d if d < 3_600 => (d / 60, "minute"),
        d if d < 86_400 => (d / 3_600, "hour"),
        d if d < 604_800 => (d / 86_400, "day"),
        d if d < 2_592_000 => (d / 604_800, "week"),
        d if d < 31_536_000 => (d / 2_592_000, "month"),
        d => (d / 31_536_000, "year"),
    };
    format!("{} {}{} ago", value, unit, if value == 1 { "" } else { "s" })
}

/// Truncates a string to at most `max_len` characters, ending with "..."
/// when something was cut.
///
/// Counts characters, not bytes, so captions with emoji or non-Latin text
/// are never split inside a character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

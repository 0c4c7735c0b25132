//
//  instaapi
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Table formatting utilities built on `comfy_table`.

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::api::common::DataPoint;
use crate::util::format_count;

/// Creates a table with the UTF-8 preset and dynamic column widths.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Fluent builder for tables with optionally colored headers.
///
/// ```rust,ignore
/// TableBuilder::new()
///     .color(color)
///     .headers(["ID", "Name"])
///     .row(["2700", "Shopping & Retail"])
///     .print();
/// ```
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            self.table
                .set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    /// Right-aligns column `index` (numbers).
    pub fn align_right(mut self, index: usize) -> Self {
        if let Some(column) = self.table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-column table of chart points (`label | value`).
pub fn data_points_table(points: &[DataPoint], value_header: &str, color: bool) -> Table {
    let mut builder = TableBuilder::new().color(color).headers(["", value_header]);
    for point in points {
        builder = builder.row([point.label.clone(), format_value(point.value)]);
    }
    builder.align_right(1).build()
}

/// Whole values print as counts, fractional ones with one decimal.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value >= 0.0 {
        format_count(value as u64)
    } else {
        format!("{:.1}", value)
    }
}

/// Week-over-week change, e.g. `+12` or `-3`, green or red when colored.
pub fn format_delta(delta: i64, color: bool) -> String {
    let text = if delta > 0 {
        format!("+{}", delta)
    } else {
        delta.to_string()
    };
    if !color {
        return text;
    }

    use console::style;
    match delta {
        d if d > 0 => style(text).green().to_string(),
        d if d < 0 => style(text).red().to_string(),
        _ => style(text).dim().to_string(),
    }
}

pub fn format_bool(value: bool, color: bool) -> String {
    if color {
        use console::style;
        if value {
            style("Yes").green().to_string()
        } else {
            style("No").dim().to_string()
        }
    } else if value {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_delta_plain() {
        assert_eq!(format_delta(12, false), "+12");
        assert_eq!(format_delta(-3, false), "-3");
        assert_eq!(format_delta(0, false), "0");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1200.0), "1,200");
        assert_eq!(format_value(61.5), "61.5");
    }

    #[test]
    fn test_data_points_table_rows() {
        let points = vec![
            DataPoint { label: "London".into(), value: 120.0 },
            DataPoint { label: "Paris".into(), value: 80.0 },
        ];
        let rendered = data_points_table(&points, "Followers", false).to_string();
        assert!(rendered.contains("London"));
        assert!(rendered.contains("120"));
        assert!(rendered.contains("Followers"));
    }
}

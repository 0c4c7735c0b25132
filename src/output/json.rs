//
//  instaapi
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON output utilities.

use serde::Serialize;
use std::io::Write;

/// Prints `value` as pretty JSON to stdout.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::business::BusinessCategory;

    #[test]
    fn test_write_json_to() {
        let mut buffer = Vec::new();
        let category = BusinessCategory {
            id: "2700".to_string(),
            name: "Shopping & Retail".to_string(),
        };
        write_json_to(&mut buffer, &[category]).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("]\n"));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["name"], "Shopping & Retail");
    }
}

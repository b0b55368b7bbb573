//! Output formatting for the CLI.

use clap::ValueEnum;
use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Pretty,
    /// JSON document on stdout
    Json,
}

/// Renders `value` as pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Left-aligned `label: value` line, padded so values line up.
pub fn field_line(label: &str, value: &str) -> String {
    format!("{:<10}{}", format!("{label}:"), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_line_alignment() {
        assert_eq!(field_line("Total", "$34.00"), "Total:    $34.00");
        assert_eq!(field_line("Subtotal", "$40.00"), "Subtotal: $40.00");
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&vec![1, 2]).unwrap();
        assert_eq!(json, "[\n  1,\n  2\n]");
    }
}

//! Date selection collaborator

use async_trait::async_trait;
use chrono::NaiveDate;

/// Native date selection surface
#[async_trait]
pub trait DatePicker: Send + Sync {
    /// Show the picker starting at `current`. `None` means dismissed without a choice.
    async fn pick(&self, current: NaiveDate) -> Option<NaiveDate>;
}

/// Parse a date typed as YYYY-MM-DD
pub fn parse_date(input: &str) -> anyhow::Result<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        anyhow::anyhow!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            input
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_iso() {
        let date = parse_date(" 2025-03-15 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        let err = parse_date("15/03/2025").unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
        assert!(parse_date("2025-02-30").is_err());
    }
}

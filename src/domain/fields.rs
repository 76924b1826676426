use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::collections::HashMap;

/// Legacy timestamp layout written by older versions of the tool
/// (e.g. "2016-03-04 10:11:12 -0500").
const LEGACY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// A row of raw values keyed by normalised column name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    values: HashMap<String, String>,
}

impl Fields {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping by zipping header names with row values
    pub fn from_row(headers: &[String], row: &[String]) -> Self {
        let values = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (normalize_key(header), value.clone()))
            .collect();
        Self { values }
    }

    #[cfg(test)]
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(normalize_key(key), value.into());
    }

    /// Raw value for a key, `None` when the column is missing or empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(&normalize_key(key))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Integer value for a key; never fails, malformed input is 0
    pub fn id(&self, key: &str) -> usize {
        self.get(key).map(coerce_id).unwrap_or(0)
    }

    /// Text value for a key, empty when missing
    pub fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    /// Timestamp value for a key, `None` when missing or unparseable
    pub fn timestamp(&self, key: &str) -> Option<DateTime<Local>> {
        let raw = self.get(key)?;
        let parsed = parse_timestamp(raw);
        if parsed.is_none() {
            log::warn!("ignoring unparseable {} timestamp {:?}", key, raw);
        }
        parsed
    }
}

/// Normalise a header name into a lookup key: trimmed, lower-cased,
/// whitespace and dashes become underscores, other punctuation is dropped.
pub fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() || c == '-' => Some('_'),
            c if c.is_alphanumeric() || c == '_' => Some(c.to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}

/// Permissive integer parse: leading digits only, anything else is 0
pub fn coerce_id(raw: &str) -> usize {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Parse an RFC 3339 timestamp, falling back to the legacy layout
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local));
    }
    if let Ok(parsed) = DateTime::parse_from_str(raw, LEGACY_TIMESTAMP_FORMAT) {
        return Some(parsed.with_timezone(&Local));
    }
    // Zone-less legacy values are read as local time
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .and_then(|naive| Local.from_local_datetime(&naive).single())
}

/// Format a timestamp the way it is persisted
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_coerce_id() {
        assert_eq!(coerce_id("12"), 12);
        assert_eq!(coerce_id("  7"), 7);
        assert_eq!(coerce_id("+3"), 3);
        assert_eq!(coerce_id("42abc"), 42);
        assert_eq!(coerce_id("abc"), 0);
        assert_eq!(coerce_id("-5"), 0);
        assert_eq!(coerce_id(""), 0);
        assert_eq!(coerce_id("99999999999999999999999999"), 0);
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("id"), "id");
        assert_eq!(normalize_key(" List ID "), "list_id");
        assert_eq!(normalize_key("Completed-At"), "completed_at");
        assert_eq!(normalize_key("name?"), "name");
    }

    #[test]
    fn test_fields_from_row_case_insensitive() {
        let headers = vec!["ID".to_string(), "Name".to_string()];
        let row = vec!["4".to_string(), "Groceries".to_string()];
        let fields = Fields::from_row(&headers, &row);

        assert_eq!(fields.id("id"), 4);
        assert_eq!(fields.text("name"), "Groceries");
        assert_eq!(fields.get("missing"), None);
    }

    #[test]
    fn test_empty_value_reads_as_missing() {
        let mut fields = Fields::new();
        fields.insert("completed_at", "");
        assert_eq!(fields.get("completed_at"), None);
        assert!(fields.timestamp("completed_at").is_none());
    }

    #[test]
    fn test_parse_timestamp_rfc3339_round_trip() {
        let now = Local::now();
        let parsed = parse_timestamp(&format_timestamp(&now)).unwrap();
        assert_eq!(parsed, now);
    }

    #[test]
    fn test_parse_timestamp_legacy_format() {
        let parsed = parse_timestamp("2016-03-04 10:11:12 +0000").unwrap();
        let utc = parsed.with_timezone(&chrono::Utc);
        assert_eq!(utc.hour(), 10);
        assert_eq!(utc.minute(), 11);
        assert_eq!(utc.second(), 12);
    }

    #[test]
    fn test_parse_timestamp_garbage() {
        assert!(parse_timestamp("yesterday-ish").is_none());
    }
}

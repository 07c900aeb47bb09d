use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};

pub const DELIMITER: &str = "+++";

/// Splits a document into its `+++`-fenced TOML frontmatter and the body.
/// Returns `None` when the document does not open with a complete block.
pub fn split_frontmatter(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source.strip_prefix(DELIMITER)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Parses frontmatter into a schema type. TOML date/datetime literals are
/// handed to the schema as strings so date fields can coerce either form.
pub fn parse_frontmatter<T: DeserializeOwned>(frontmatter: &str) -> Result<T, toml::de::Error> {
    let table: toml::Table = toml::from_str(frontmatter)?;
    normalize_datetimes(toml::Value::Table(table)).try_into()
}

fn normalize_datetimes(value: toml::Value) -> toml::Value {
    match value {
        toml::Value::Datetime(dt) => toml::Value::String(dt.to_string()),
        toml::Value::Array(items) => {
            toml::Value::Array(items.into_iter().map(normalize_datetimes).collect())
        }
        toml::Value::Table(table) => toml::Value::Table(
            table
                .into_iter()
                .map(|(k, v)| (k, normalize_datetimes(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Accepts `2024-05-01`, RFC 3339 timestamps, and offset-less datetimes.
pub fn parse_loose_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

pub fn coerce_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_loose_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'")))
}

pub fn coerce_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    coerce_date(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic_document() {
        let (fm, body) = split_frontmatter("+++\ntitle = \"Hi\"\n+++\nBody text\n").unwrap();
        assert_eq!(fm, "title = \"Hi\"\n");
        assert_eq!(body, "Body text\n");
    }

    #[test]
    fn test_split_handles_crlf_and_empty_block() {
        let (fm, body) = split_frontmatter("+++\r\n+++\r\nBody").unwrap();
        assert_eq!(fm, "");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_requires_opening_and_closing() {
        assert!(split_frontmatter("title = \"x\"\n+++\n").is_none());
        assert!(split_frontmatter("+++\ntitle = \"x\"\n").is_none());
    }

    #[test]
    fn test_loose_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert_eq!(parse_loose_date("2024-05-01"), expected);
        assert_eq!(parse_loose_date("2024-05-01T08:30:00Z"), expected);
        assert_eq!(parse_loose_date("2024-05-01T08:30:00"), expected);
        assert_eq!(parse_loose_date("May 1st"), None);
    }

    #[test]
    fn test_toml_date_literal_becomes_string() {
        #[derive(Deserialize)]
        struct Dated {
            #[serde(deserialize_with = "coerce_date")]
            when: NaiveDate,
        }
        let parsed: Dated = parse_frontmatter("when = 2024-05-01").unwrap();
        assert_eq!(parsed.when, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }
}

//! Formatting and parsing helpers shared by every screen

use chrono::{DateTime, Utc};

/// Format a monetary value the way the console shows money: `R$ 1.234,50`
#[must_use]
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", format_decimal(value, 2))
}

/// Format a number with pt-BR separators and a fixed number of decimals
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn format_decimal(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let scale = 10_i64.pow(decimals);
    let scaled = (value.abs() * scale as f64).round() as i64;
    let integer = scaled / scale;
    let fraction = scaled % scale;

    let digits = integer.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && scaled != 0 { "-" } else { "" };
    if decimals == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{fraction:0width$}", width = decimals as usize)
    }
}

/// Format a period-over-period change: `+12%`, `-3%`
#[must_use]
pub fn format_change(percent: f64) -> String {
    if percent >= 0.0 {
        format!("+{percent}%")
    } else {
        format!("{percent}%")
    }
}

/// Share of `part` in `total` as a one-decimal percentage; `0%` when nothing was sent
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_rate(part: u64, total: u64) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{:.1}%", part as f64 / total as f64 * 100.0)
}

/// Human readable age of a timestamp relative to `now`
#[must_use]
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);

    match seconds {
        0..60 => format!("{seconds}s atrás"),
        60..3600 => format!("{}min atrás", seconds / 60),
        3600..86_400 => format!("{}h atrás", seconds / 3600),
        _ => then.format("%d/%m/%Y").to_string(),
    }
}

/// Parse a comma separated list of user ids as typed by an operator.
///
/// Each entry is trimmed and its leading digits are read; entries without
/// digits and zero ids are dropped.
#[must_use]
pub fn parse_id_list(raw: &str) -> Vec<u64> {
    raw.split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            let end = entry
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(entry.len());
            entry.get(..end)?.parse::<u64>().ok()
        })
        .filter(|id| *id != 0)
        .collect()
}

/// Parse a number typed into a form field, accepting `12,5` as well as `12.5`
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Serde adapters for backends that are loose with JSON types
pub mod lenient {
    use serde::{Deserialize, Deserializer, de::Error as _};
    use serde_json::Value;

    fn number_from(value: &Value) -> Option<f64> {
        match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => super::parse_decimal(text),
            _ => None,
        }
    }

    /// A number that may arrive as a JSON number, a numeric string or null
    ///
    /// # Errors
    ///
    /// Returns an error only if the input is not valid JSON.
    pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(number_from))
    }

    /// A non-negative count; anything unreadable counts as zero
    ///
    /// # Errors
    ///
    /// Returns an error only if the input is not valid JSON.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .and_then(number_from)
            .filter(|n| *n > 0.0)
            .map_or(0, |n| n.round() as u64))
    }

    /// Text that may arrive as a string, a number or null
    ///
    /// # Errors
    ///
    /// Returns an error only if the input is not valid JSON.
    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text,
            Some(other) => other.to_string(),
        })
    }

    /// A flag stored as a boolean, `0`/`1` or their string forms
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not one of the accepted forms.
    pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(flag)) => Ok(flag),
            Some(Value::Number(number)) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
            Some(Value::String(text)) => match text.trim() {
                "1" | "true" => Ok(true),
                "" | "0" | "false" => Ok(false),
                other => Err(D::Error::custom(format!("invalid flag '{other}'"))),
            },
            Some(other) => Err(D::Error::custom(format!("invalid flag {other}"))),
        }
    }

    /// A list of strings sent either as a JSON array or as a string holding one
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither form.
    pub fn string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
            Some(Value::String(text)) => serde_json::from_str::<Vec<String>>(&text)
                .map(Some)
                .map_err(D::Error::custom),
            Some(array @ Value::Array(_)) => serde_json::from_value::<Vec<String>>(array)
                .map(Some)
                .map_err(D::Error::custom),
            Some(other) => Err(D::Error::custom(format!("expected a list, got {other}"))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;
    use serde::Deserialize;

    #[rstest]
    #[case(0.0, "R$ 0,00")]
    #[case(5.9, "R$ 5,90")]
    #[case(1234.5, "R$ 1.234,50")]
    #[case(1_234_567.891, "R$ 1.234.567,89")]
    #[case(-12.0, "R$ -12,00")]
    #[case(f64::NAN, "R$ 0")]
    fn test_format_brl(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_brl(value), expected);
    }

    #[rstest]
    #[case(12.0, "+12%")]
    #[case(0.0, "+0%")]
    #[case(-3.5, "-3.5%")]
    fn test_format_change(#[case] percent: f64, #[case] expected: &str) {
        assert_eq!(format_change(percent), expected);
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0, 0), "0%");
        assert_eq!(format_rate(1, 3), "33.3%");
        assert_eq!(format_rate(40, 40), "100.0%");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();

        assert_eq!(time_ago(now - chrono::Duration::seconds(42), now), "42s atrás");
        assert_eq!(time_ago(now - chrono::Duration::minutes(5), now), "5min atrás");
        assert_eq!(time_ago(now - chrono::Duration::hours(3), now), "3h atrás");
        assert_eq!(time_ago(now - chrono::Duration::days(2), now), "08/05/2024");
        assert_eq!(time_ago(now + chrono::Duration::seconds(30), now), "0s atrás");
    }

    #[rstest]
    #[case("3, 7", vec![3, 7])]
    #[case("3,7,", vec![3, 7])]
    #[case(" 12 ,abc, 0, 9x", vec![12, 9])]
    #[case("", vec![])]
    #[case("-4, 5", vec![5])]
    fn test_parse_id_list(#[case] raw: &str, #[case] expected: Vec<u64>) {
        assert_eq!(parse_id_list(raw), expected);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("5.90"), Some(5.9));
        assert_eq!(parse_decimal("5,90"), Some(5.9));
        assert_eq!(parse_decimal("  "), None);
        assert_eq!(parse_decimal("abc"), None);
    }

    #[derive(Debug, Deserialize)]
    struct Loose {
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        rating: Option<f64>,
        #[serde(default, deserialize_with = "lenient::count")]
        orders: u64,
        #[serde(default, deserialize_with = "lenient::text")]
        label: String,
        #[serde(default, deserialize_with = "lenient::flag")]
        enabled: bool,
        #[serde(default, deserialize_with = "lenient::string_list")]
        methods: Option<Vec<String>>,
    }

    #[test]
    fn test_lenient_accepts_strings_and_numbers() {
        let loose: Loose = serde_json::from_str(
            r#"{"rating":"4.5","orders":"12","label":42,"enabled":1,"methods":"[\"PIX\",\"CASH\"]"}"#,
        )
        .unwrap();

        assert_eq!(loose.rating, Some(4.5));
        assert_eq!(loose.orders, 12);
        assert_eq!(loose.label, "42");
        assert!(loose.enabled);
        assert_eq!(loose.methods, Some(vec!["PIX".to_string(), "CASH".to_string()]));
    }

    #[test]
    fn test_lenient_defaults_on_missing_or_null() {
        let loose: Loose = serde_json::from_str(r#"{"rating":null,"methods":["DEBIT"]}"#).unwrap();

        assert_eq!(loose.rating, None);
        assert_eq!(loose.orders, 0);
        assert_eq!(loose.label, "");
        assert!(!loose.enabled);
        assert_eq!(loose.methods, Some(vec!["DEBIT".to_string()]));
    }

    #[test]
    fn test_lenient_flag_rejects_garbage() {
        let result = serde_json::from_str::<Loose>(r#"{"enabled":"maybe"}"#);
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn parsed_ids_are_never_zero(raw in "[0-9, a-z]{0,40}") {
            prop_assert!(parse_id_list(&raw).iter().all(|id| *id != 0));
        }

        #[test]
        fn joined_ids_round_trip(ids in proptest::collection::vec(1_u64..1_000_000, 0..10)) {
            let raw = ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
            prop_assert_eq!(parse_id_list(&raw), ids);
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Feed loading: one read of the JSON feed, shape validation and ordering.

use super::record::Record;
use crate::error::LoadError;
use serde_json::Value;
use std::cmp::Ordering;

/// Fetches the feed at `url` and returns its records, newest first.
///
/// Owned arguments keep the future `'static` so it can run inside an
/// `iced::Task`.
pub async fn load(client: reqwest::Client, url: String) -> Result<Vec<Record>, LoadError> {
    tracing::info!(%url, "fetching APOD feed");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Transport(format!("HTTP {}", status)));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    let records = decode(&body)?;
    tracing::info!(count = records.len(), "APOD feed loaded");
    Ok(records)
}

/// Decodes a feed body and sorts it by date, newest first.
pub fn decode(body: &[u8]) -> Result<Vec<Record>, LoadError> {
    let payload: Value =
        serde_json::from_slice(body).map_err(|e| LoadError::Decode(e.to_string()))?;

    let items = match payload {
        Value::Array(items) => items,
        other => {
            return Err(LoadError::Shape(format!(
                "expected an array, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut records: Vec<Record> = items.iter().map(Record::from_json).collect();
    sort_by_date_desc(&mut records);
    Ok(records)
}

/// Stable sort, newest first.
///
/// Records without a parsable date go after every dated record and keep
/// their relative order, as do records sharing a date. Treating them as ties
/// with everything would break transitivity, so they are grouped at the end.
pub fn sort_by_date_desc(records: &mut [Record]) {
    records.sort_by(compare_dates_desc);
}

fn compare_dates_desc(a: &Record, b: &Record) -> Ordering {
    match (a.sort_date(), b.sort_date()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(date: Option<&str>, title: &str) -> Record {
        Record {
            date: date.map(str::to_owned),
            title: Some(title.to_owned()),
            ..Record::default()
        }
    }

    fn titles(records: &[Record]) -> Vec<&str> {
        records.iter().map(Record::title).collect()
    }

    #[test]
    fn decode_sorts_newest_first() {
        let body = br#"[
            {"date": "2024-01-01", "title": "old"},
            {"date": "2024-01-03", "title": "new"},
            {"date": "2024-01-02", "title": "mid"}
        ]"#;

        let records = decode(body).expect("valid feed");
        assert_eq!(titles(&records), ["new", "mid", "old"]);
    }

    #[test]
    fn equal_dates_keep_source_order() {
        let mut records = vec![
            dated(Some("2024-01-01"), "a"),
            dated(Some("2024-01-02"), "b"),
            dated(Some("2024-01-01"), "c"),
            dated(Some("2024-01-02"), "d"),
        ];
        sort_by_date_desc(&mut records);
        assert_eq!(titles(&records), ["b", "d", "a", "c"]);
    }

    #[test]
    fn undated_records_go_last_in_source_order() {
        let mut records = vec![
            dated(None, "x"),
            dated(Some("2023-12-31"), "a"),
            dated(Some("not a date"), "y"),
            dated(Some("2024-01-01"), "b"),
            dated(None, "z"),
        ];
        sort_by_date_desc(&mut records);
        assert_eq!(titles(&records), ["b", "a", "x", "y", "z"]);
    }

    #[test]
    fn output_is_non_increasing_by_date() {
        let body = br#"[
            {"date": "2023-06-01"}, {"date": "2024-02-29"}, {"date": "2022-12-25"},
            {"date": "2024-02-28"}, {"date": "2023-06-01"}, {"date": "2021-01-01"}
        ]"#;

        let records = decode(body).expect("valid feed");
        let dates: Vec<_> = records.iter().filter_map(Record::sort_date).collect();
        assert_eq!(dates.len(), 6);
        assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn empty_array_is_a_valid_feed() {
        assert_eq!(decode(b"[]").expect("valid feed"), Vec::<Record>::new());
    }

    #[test]
    fn object_payload_is_a_shape_error() {
        let err = decode(br#"{"date": "2024-01-01"}"#).unwrap_err();
        assert_eq!(err, LoadError::Shape("expected an array, got an object".into()));
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = decode(b"<html>not json</html>").unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }
}

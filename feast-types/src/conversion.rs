use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

pub fn convert_timestamp(ts: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: ts.timestamp(),
        nanos: ts.timestamp_subsec_nanos() as i32,
    }
}

/// Splits a comma separated tag string. An empty string yields no tags.
pub fn convert_tag_string_to_list(tags: &str) -> Vec<String> {
    if tags.trim().is_empty() {
        return vec![];
    }
    tags.split(',').map(|tag| tag.trim().to_string()).collect()
}

pub fn convert_json_string_to_map(json: &str) -> Result<HashMap<String, String>> {
    if json.trim().is_empty() {
        return Ok(HashMap::new());
    }
    serde_json::from_str(json).context("Parsing JSON object of strings")
}

pub fn convert_map_to_json_string(map: &HashMap<String, String>) -> Result<String> {
    Ok(serde_json::to_string(map)?)
}

pub fn convert_map_to_args(map: &HashMap<String, String>) -> Vec<String> {
    map.iter()
        .map(|(key, value)| format!("--{key}={value}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_convert_timestamp() {
        let date = Utc.timestamp_millis_opt(1000).unwrap();
        let expected = prost_types::Timestamp {
            seconds: 1,
            nanos: 0,
        };
        assert_eq!(convert_timestamp(date), expected);

        let date = Utc.timestamp_millis_opt(1500).unwrap();
        assert_eq!(convert_timestamp(date).nanos, 500_000_000);
    }

    #[test]
    fn test_convert_tag_string_to_list() {
        assert_eq!(
            convert_tag_string_to_list("value1,value2"),
            ["value1", "value2"]
        );
        assert!(convert_tag_string_to_list("").is_empty());
    }

    #[test]
    fn test_convert_json_string_to_map() {
        let map = convert_json_string_to_map(r#"{"key": "value"}"#).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["key"], "value");
        assert!(convert_json_string_to_map("{}").unwrap().is_empty());
        assert!(convert_json_string_to_map("").unwrap().is_empty());
        assert!(convert_json_string_to_map(r#"{"key": 1}"#).is_err());
    }

    #[test]
    fn test_convert_map_to_json_string() {
        let map = HashMap::from([("key".to_string(), "value".to_string())]);
        let json = convert_map_to_json_string(&map).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["key"], "value");
    }

    #[test]
    fn test_convert_map_to_args() {
        let map = HashMap::from([
            ("key".to_string(), "value".to_string()),
            ("key2".to_string(), "value2".to_string()),
        ]);
        let args = convert_map_to_args(&map);
        assert_eq!(args.len(), 2);
        assert!(args.contains(&"--key=value".to_string()));
        assert!(args.contains(&"--key2=value2".to_string()));
    }
}

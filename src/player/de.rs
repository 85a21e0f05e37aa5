//! Lenient field readers for the player API.
//!
//! The upstream mixes JSON numbers and numeric strings for the same field
//! depending on the account, so every reader here accepts both and maps
//! anything it cannot make sense of to `None` instead of failing the section.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i.to_string()),
            None => n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc().to_string()),
        },
        _ => None,
    }
}

pub fn id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_id(&value))
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        }
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

pub fn int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_i64(&value))
}

pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => Some(b),
        Value::String(ref s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(ref s) if s.eq_ignore_ascii_case("false") => Some(false),
        other => value_as_i64(&other).map(|n| n != 0),
    })
}

pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// A list of item ids. Non-list values read as an empty list. Entries that are
/// not ids read as `""` so list positions stay aligned with the equipment
/// slots.
pub fn id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .map(|item| value_as_id(&item).unwrap_or_default())
        .collect())
}

/// Element count for arrays, the value itself for numbers.
pub fn count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(items.len() as i64),
        other => value_as_i64(&other),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "super::id")]
        id: Option<String>,
        #[serde(default, deserialize_with = "super::int")]
        int: Option<i64>,
        #[serde(default, deserialize_with = "super::flag")]
        flag: Option<bool>,
        #[serde(default, deserialize_with = "super::id_list")]
        list: Vec<String>,
        #[serde(default, deserialize_with = "super::count")]
        count: Option<i64>,
    }

    fn read(value: serde_json::Value) -> Fields {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn reads_numbers_and_numeric_strings() {
        let p = read(json!({ "id": 902000061, "int": "1500", "flag": 1 }));
        assert_eq!(p.id.as_deref(), Some("902000061"));
        assert_eq!(p.int, Some(1500));
        assert_eq!(p.flag, Some(true));

        let p = read(json!({ "id": " 42 ", "int": 7.9, "flag": "false" }));
        assert_eq!(p.id.as_deref(), Some("42"));
        assert_eq!(p.int, Some(7));
        assert_eq!(p.flag, Some(false));
    }

    #[test]
    fn unreadable_values_become_none() {
        let p = read(json!({ "id": "", "int": "abc", "flag": [1], "list": "nope", "count": {} }));
        assert_eq!(p.id, None);
        assert_eq!(p.int, None);
        assert_eq!(p.flag, None);
        assert!(p.list.is_empty());
        assert_eq!(p.count, None);

        let p = read(json!({ "id": null, "int": null }));
        assert_eq!(p.id, None);
        assert_eq!(p.int, None);

        assert_eq!(read(json!({ "id": {} })).id, None);
        assert_eq!(read(json!({ "id": [902000061] })).id, None);
        assert_eq!(read(json!({ "id": false })).id, None);
    }

    #[test]
    fn id_lists_accept_mixed_entries() {
        let p = read(json!({ "list": [907104822, "912000002", null, "", 1, true, {}, [2]] }));
        assert_eq!(p.list, vec!["907104822", "912000002", "", "", "1", "", "", ""]);
    }

    #[test]
    fn count_accepts_arrays_and_numbers() {
        assert_eq!(read(json!({ "count": [1, 2, 3] })).count, Some(3));
        assert_eq!(read(json!({ "count": 5 })).count, Some(5));
    }
}

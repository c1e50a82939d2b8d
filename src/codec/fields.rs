//! Serde helpers shared by the domain types.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

/// Message prefix used to tell timestamp failures apart from other data errors.
pub(crate) const INVALID_TIMESTAMP: &str = "invalid RFC 3339 timestamp";

/// Treat an explicit `null` the same as an absent field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

pub(crate) fn is_zero(value: &u64) -> bool {
    *value == 0
}

/// RFC 3339 timestamps, kept with their original offset.
pub(crate) mod timestamp {
    use chrono::SecondsFormat;
    use serde::{de, Serializer};

    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<FixedOffset>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => DateTime::parse_from_rfc3339(&raw).map(Some).map_err(|e| {
                de::Error::custom(format!("{} {:?}: {}", INVALID_TIMESTAMP, raw, e))
            }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "nullable")]
        name: String,
        #[serde(default, deserialize_with = "nullable")]
        tags: Vec<String>,
        #[serde(
            default,
            with = "timestamp",
            skip_serializing_if = "Option::is_none"
        )]
        when: Option<DateTime<FixedOffset>>,
    }

    #[test]
    fn test_nullable_maps_null_to_default() {
        let probe: Probe = serde_json::from_str(r#"{"name": null, "tags": null}"#).unwrap();
        assert_eq!(probe.name, "");
        assert!(probe.tags.is_empty());
    }

    #[test]
    fn test_nullable_keeps_present_values() {
        let probe: Probe = serde_json::from_str(r#"{"name": "x", "tags": ["a", "b"]}"#).unwrap();
        assert_eq!(probe.name, "x");
        assert_eq!(probe.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_nullable_still_rejects_wrong_type() {
        assert!(serde_json::from_str::<Probe>(r#"{"name": 42}"#).is_err());
    }

    #[test]
    fn test_timestamp_keeps_offset() {
        let probe: Probe = serde_json::from_str(r#"{"when": "2021-06-01T12:30:00+02:00"}"#).unwrap();
        let when = probe.when.unwrap();
        assert_eq!(when.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(
            serde_json::to_string(&probe).unwrap(),
            r#"{"name":"","tags":[],"when":"2021-06-01T12:30:00+02:00"}"#
        );
    }

    #[test]
    fn test_timestamp_utc_is_written_with_z() {
        let probe: Probe = serde_json::from_str(r#"{"when": "2021-06-01T10:00:00+00:00"}"#).unwrap();
        let json = serde_json::to_string(&probe).unwrap();
        assert!(json.contains(r#""when":"2021-06-01T10:00:00Z""#));
    }

    #[test]
    fn test_timestamp_null_is_absent() {
        let probe: Probe = serde_json::from_str(r#"{"when": null}"#).unwrap();
        assert!(probe.when.is_none());
    }

    #[test]
    fn test_invalid_timestamp_message_is_tagged() {
        let err = serde_json::from_str::<Probe>(r#"{"when": "yesterday"}"#).unwrap_err();
        assert!(err.to_string().starts_with(INVALID_TIMESTAMP));
    }
}

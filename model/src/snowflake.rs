use super::util;
use chrono::{DateTime, TimeZone, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Milliseconds between the unix epoch and the first second of 2015.
pub const DISCORD_EPOCH: u64 = 1_420_070_400_000;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Snowflake(pub u64);

impl Snowflake {
    /// Creation time encoded in the upper 42 bits of the id.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let millis = (self.0 >> 22) + DISCORD_EPOCH;
        Utc.timestamp_millis_opt(millis as i64).single()
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Value = Deserialize::deserialize(deserializer)?;

        if let Some(i) = value.as_u64() {
            return Ok(Snowflake(i));
        }

        if let Some(s) = value.as_str() {
            return Ok(Snowflake(s.parse().map_err(Error::custom)?));
        }

        Err(Error::invalid_type(
            util::to_unexpected(&value),
            &"a string or u64",
        ))
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Snowflake(s.parse()?))
    }
}

impl From<u64> for Snowflake {
    fn from(x: u64) -> Self {
        Snowflake(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_string_or_int() {
        let from_str: Snowflake = serde_json::from_value(json!("80351110224678912")).unwrap();
        let from_int: Snowflake = serde_json::from_value(json!(80351110224678912u64)).unwrap();

        assert_eq!(from_str, Snowflake(80351110224678912));
        assert_eq!(from_str, from_int);
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&Snowflake(175928847299117063)).unwrap();
        assert_eq!(json, r#""175928847299117063""#);
    }

    #[test]
    fn test_reject_other_types() {
        assert!(serde_json::from_value::<Snowflake>(json!(true)).is_err());
        assert!(serde_json::from_value::<Snowflake>(json!("abc")).is_err());
    }

    #[test]
    fn test_timestamp() {
        // example id from the api reference, created 2016-04-30 11:18:25.796 UTC
        let ts = Snowflake(175928847299117063).timestamp().unwrap();
        assert_eq!(ts.timestamp_millis(), 1462015105796);
    }
}

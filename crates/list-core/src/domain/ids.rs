//! Column and item identifiers
//!
//! Ids are plain `u32` values on the wire. Older boards may carry them as
//! numeric strings, so deserialization accepts both and normalizes to a number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire form accepted for an id
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u32),
    Text(String),
}

fn parse_id(text: &str) -> Result<u32, String> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid id {:?}", text))
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                match RawId::deserialize(deserializer)? {
                    RawId::Number(n) => Ok(Self(n)),
                    RawId::Text(s) => parse_id(&s).map(Self).map_err(serde::de::Error::custom),
                }
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_id(s).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Fixed identity of a board column
    ColumnId
);

numeric_id!(
    /// Board-wide unique identity of an item
    ItemId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_string_matches_number() {
        let from_number: ItemId = serde_json::from_str("7").unwrap();
        let from_text: ItemId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(from_text.get(), 7);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ColumnId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        assert!(serde_json::from_str::<ItemId>("\"abc\"").is_err());
        assert!(serde_json::from_str::<ColumnId>("-1").is_err());
    }

    #[test]
    fn test_from_str_trims() {
        assert_eq!(" 42 ".parse::<ItemId>(), Ok(ItemId::new(42)));
        assert!("".parse::<ColumnId>().is_err());
    }
}

//! Serde helpers for Discord wire quirks.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

/// Module to handle deserialization of Snowflake IDs that might be strings or numbers.
pub mod string_to_u64 {
    use super::{de, fmt, Deserializer, Serializer, Visitor};

    /// Serializes a u64 as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    /// Deserializes a u64 from a string or number.
    /// Negative values are read as i64 bit patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string or integer, or if parsing fails.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrIntVisitor;

        impl Visitor<'_> for StringOrIntVisitor {
            type Value = u64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing a snowflake ID")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value)
            }

            #[allow(clippy::cast_sign_loss)]
            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value as u64)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                crate::domain::snowflake::parse_snowflake(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(StringOrIntVisitor)
    }
}

/// Bit sets sent as JSON integers (user flags, SKU flags).
pub mod bits {
    use bitflags::Flags;
    use serde::{Deserializer, Serializer};

    /// Serializes the raw bits as a number.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S, F>(value: &F, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        F: Flags<Bits = u64>,
    {
        serializer.serialize_u64(value.bits())
    }

    /// Deserializes raw bits, keeping bits this version does not name.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an integer or numeric string.
    pub fn deserialize<'de, D, F>(deserializer: D) -> Result<F, D::Error>
    where
        D: Deserializer<'de>,
        F: Flags<Bits = u64>,
    {
        super::string_to_u64::deserialize(deserializer).map(F::from_bits_retain)
    }
}

/// Bit sets sent as decimal strings (permissions).
pub mod bits_string {
    use bitflags::Flags;
    use serde::{Deserializer, Serializer};

    /// Serializes the raw bits as a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S, F>(value: &F, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        F: Flags<Bits = u64>,
    {
        super::string_to_u64::serialize(&value.bits(), serializer)
    }

    /// Deserializes raw bits from a string or number.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be parsed.
    pub fn deserialize<'de, D, F>(deserializer: D) -> Result<F, D::Error>
    where
        D: Deserializer<'de>,
        F: Flags<Bits = u64>,
    {
        super::string_to_u64::deserialize(deserializer).map(F::from_bits_retain)
    }

    /// Optional bit sets in request bodies, sent only when present.
    pub mod option {
        use bitflags::Flags;
        use serde::Serializer;

        /// Serializes `Some` as a decimal string and `None` as null.
        ///
        /// # Errors
        ///
        /// Returns an error if the serializer fails.
        #[allow(clippy::ref_option)]
        pub fn serialize<S, F>(value: &Option<F>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            F: Flags<Bits = u64>,
        {
            match value {
                Some(flags) => super::serialize(flags, serializer),
                None => serializer.serialize_none(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Wrapper(#[serde(with = "super::string_to_u64")] u64);

    #[test]
    fn test_snowflake_from_string_or_number() {
        let from_str: Wrapper = serde_json::from_str("\"80351110224678912\"").unwrap();
        let from_num: Wrapper = serde_json::from_str("80351110224678912").unwrap();
        assert_eq!(from_str, from_num);
        assert_eq!(from_str.0, 80_351_110_224_678_912);
    }

    #[test]
    fn test_snowflake_serializes_as_string() {
        let json = serde_json::to_string(&Wrapper(42)).unwrap();
        assert_eq!(json, "\"42\"");
    }

    #[test]
    fn test_negative_string_is_bit_pattern() {
        let value: Wrapper = serde_json::from_str("\"-1\"").unwrap();
        assert_eq!(value.0, u64::MAX);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(serde_json::from_str::<Wrapper>("\"abc\"").is_err());
        assert!(serde_json::from_str::<Wrapper>("true").is_err());
    }
}

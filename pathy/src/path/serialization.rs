//! serde support.
//!
//! A path is stored as its canonical string and read back through the
//! `FromStr` impl, so a deserialized value satisfies the same tag checks as a
//! parsed one.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::marker::{FileType, PathKind};
use super::typed::TypedPath;

impl<K, T: FileType> Serialize for TypedPath<K, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, K: PathKind, T: FileType> Deserialize<'de> for TypedPath<K, T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

use serde::{Deserialize, Deserializer};

pub mod categories;
pub mod products;
pub mod tasks;

/// Distinguish an absent member from an explicit `null`: combined with
/// `#[serde(default)]`, a missing key stays `None` while `null` becomes
/// `Some(None)`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod modules;
pub mod pages;
pub mod public;
pub mod revisions;

use serde::{Deserialize, Deserializer};

/// For patch bodies: an absent field stays `None`, `null` becomes `Some(None)`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

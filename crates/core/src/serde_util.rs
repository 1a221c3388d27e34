//! Serde helpers for request bodies.

use serde::{Deserialize, Deserializer};

/// Deserialize a value where an explicit `null` means the type's default.
///
/// Pair with `#[serde(default)]` so a missing key and a `null` value read the
/// same:
///
/// ```rust
/// use serde::Deserialize;
/// use entain_core::serde_util::null_as_default;
///
/// #[derive(Deserialize)]
/// struct Body {
///     #[serde(default, deserialize_with = "null_as_default")]
///     order_by: String,
/// }
///
/// let body: Body = serde_json::from_str(r#"{"order_by": null}"#).unwrap();
/// assert_eq!(body.order_by, "");
/// ```
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

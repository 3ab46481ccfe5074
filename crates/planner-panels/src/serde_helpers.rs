//! Serde helpers shared by the layout types.

use serde::{Deserialize, Deserializer};

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Use together with `#[serde(default)]`: a missing key stays `None`,
/// `null` becomes `Some(None)` and a value becomes `Some(Some(v))`.
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct Patch {
///     #[serde(default, deserialize_with = "crate::serde_helpers::double_option")]
///     group_id: Option<Option<String>>,
/// }
/// ```
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::double_option")]
        value: Option<Option<u32>>,
    }

    #[test]
    fn test_double_option_distinguishes_null_from_missing() {
        let missing: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.value, None);

        let null: Probe = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert_eq!(null.value, Some(None));

        let set: Probe = serde_json::from_str(r#"{"value":7}"#).unwrap();
        assert_eq!(set.value, Some(Some(7)));
    }
}

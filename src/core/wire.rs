use serde::{Deserialize, Deserializer};

/// Deserialize a field that upstream serves either as a JSON string or a bare
/// number into an optional `String`. The scheme API does this for
/// `scheme_code` (a number) while the bulk feed side of the crate treats
/// codes as opaque text.
pub(crate) fn de_opt_string_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyScalar {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<AnyScalar>::deserialize(deserializer)? {
        Some(AnyScalar::Str(s)) => Some(s),
        Some(AnyScalar::Int(i)) => Some(i.to_string()),
        Some(AnyScalar::Float(f)) => Some(f.to_string()),
        None => None,
    })
}

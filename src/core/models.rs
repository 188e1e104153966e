use serde::{Deserialize, Serialize};

use crate::core::MfError;

/// A point-in-time NAV quote for a single scheme, taken from the bulk feed.
///
/// `nav` is kept exactly as the feed publishes it (decimal text); parse it
/// with `rust_decimal` when arithmetic is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The scheme code, the registry key.
    pub scheme_code: String,
    /// The scheme's display name.
    pub scheme_name: String,
    /// The net asset value as published (decimal text, e.g. `"345.7716"`).
    pub nav: String,
    /// The feed's report date for this NAV (`DD-Mon-YYYY`).
    pub last_updated: String,
}

/// Serialize a result to a JSON string.
///
/// Every public result model implements this; round-tripping the string back
/// through `serde_json` yields a value equal to the original.
pub trait ToJson: Serialize {
    fn to_json(&self) -> Result<String, MfError> {
        serde_json::to_string(self).map_err(|e| MfError::Data(format!("serialize: {e}")))
    }
}

impl ToJson for Quote {}

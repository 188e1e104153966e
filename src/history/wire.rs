use serde::Deserialize;

use crate::core::wire::de_opt_string_from_any;

/// Top-level shape of `api.mfapi.in/mf/<code>`.
#[derive(Deserialize)]
pub(crate) struct SchemeApiEnvelope {
    pub(crate) meta: Option<MetaNode>,
    pub(crate) data: Option<Vec<DataNode>>,
}

#[derive(Deserialize)]
pub(crate) struct MetaNode {
    pub(crate) fund_house: Option<String>,
    pub(crate) scheme_type: Option<String>,
    pub(crate) scheme_category: Option<String>,
    // served as a bare number by the API, as text by the feed
    #[serde(default, deserialize_with = "de_opt_string_from_any")]
    pub(crate) scheme_code: Option<String>,
    pub(crate) scheme_name: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct DataNode {
    pub(crate) date: Option<String>,
    pub(crate) nav: Option<String>,
}

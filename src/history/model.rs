use serde::{Deserialize, Serialize};

use crate::core::ToJson;

/// One `{date, nav}` point of a scheme's historical series.
///
/// Both fields are kept as upstream publishes them: `date` is `DD-MM-YYYY`
/// text, `nav` is decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavRecord {
    pub date: String,
    pub nav: String,
}

/// The scheme metadata block shared by details and history responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeMeta {
    pub fund_house: String,
    pub scheme_type: String,
    pub scheme_category: String,
    pub scheme_code: String,
    pub scheme_name: String,
}

/// Scheme metadata plus the earliest published record as the start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeDetails {
    #[serde(flatten)]
    pub meta: SchemeMeta,
    /// The oldest record of the series: the date the scheme started reporting.
    pub scheme_start_date: NavRecord,
}

/// Scheme metadata plus the full historical NAV series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeHistory {
    #[serde(flatten)]
    pub meta: SchemeMeta,
    /// The series in upstream order (newest first). `None` when upstream
    /// published no records at all — never an empty vector.
    pub data: Option<Vec<NavRecord>>,
}

impl ToJson for NavRecord {}
impl ToJson for SchemeMeta {}
impl ToJson for SchemeDetails {}
impl ToJson for SchemeHistory {}

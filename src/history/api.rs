use crate::core::client::{CacheMode, RetryConfig};
use crate::core::{MfClient, MfError, net};
use crate::history::model::{NavRecord, SchemeDetails, SchemeHistory, SchemeMeta};
use crate::history::wire::{DataNode, MetaNode, SchemeApiEnvelope};

pub(super) async fn fetch_scheme(
    client: &MfClient,
    code: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<SchemeApiEnvelope, MfError> {
    let url = client.scheme_api_base().join(code)?;

    if cache_mode == CacheMode::Use
        && let Some(text) = client.cache_get(&url).await
    {
        return serde_json::from_str(&text)
            .map_err(|e| MfError::Data(format!("scheme api json parse (cache): {e}")));
    }

    let req = client
        .http()
        .get(url.clone())
        .header("accept", "application/json");
    let resp = client.send_with_retry(req, retry_override).await?;

    let status = resp.status().as_u16();
    let text = net::get_text(resp, "scheme_api", code, "json").await?;

    if status >= 400 {
        return Err(MfError::Status {
            status,
            url: url.to_string(),
        });
    }

    if cache_mode != CacheMode::Bypass {
        client.cache_put(&url, &text, None).await;
    }

    serde_json::from_str(&text).map_err(|e| MfError::Data(format!("scheme api json parse: {e}")))
}

fn map_meta(meta: MetaNode) -> Result<SchemeMeta, MfError> {
    let missing = |field: &str| MfError::Data(format!("scheme api `meta` missing `{field}`"));
    Ok(SchemeMeta {
        fund_house: meta.fund_house.ok_or_else(|| missing("fund_house"))?,
        scheme_type: meta.scheme_type.ok_or_else(|| missing("scheme_type"))?,
        scheme_category: meta
            .scheme_category
            .ok_or_else(|| missing("scheme_category"))?,
        scheme_code: meta.scheme_code.ok_or_else(|| missing("scheme_code"))?,
        scheme_name: meta.scheme_name.ok_or_else(|| missing("scheme_name"))?,
    })
}

fn map_records(env_data: Option<Vec<DataNode>>) -> Result<Vec<NavRecord>, MfError> {
    let data = env_data.ok_or_else(|| MfError::Data("scheme api response missing `data`".into()))?;
    data.into_iter()
        .map(|node| {
            Ok(NavRecord {
                date: node
                    .date
                    .ok_or_else(|| MfError::Data("scheme api record missing `date`".into()))?,
                nav: node
                    .nav
                    .ok_or_else(|| MfError::Data("scheme api record missing `nav`".into()))?,
            })
        })
        .collect()
}

pub(super) fn parse_details(env: SchemeApiEnvelope) -> Result<SchemeDetails, MfError> {
    let meta = env
        .meta
        .ok_or_else(|| MfError::Data("scheme api response missing `meta`".into()))?;
    let mut records = map_records(env.data)?;
    // upstream is newest-first, so the start date is the last record
    let start = records
        .pop()
        .ok_or_else(|| MfError::Data("scheme api returned no records to derive a start date".into()))?;
    Ok(SchemeDetails {
        meta: map_meta(meta)?,
        scheme_start_date: start,
    })
}

pub(super) fn parse_history(env: SchemeApiEnvelope) -> Result<SchemeHistory, MfError> {
    let meta = env
        .meta
        .ok_or_else(|| MfError::Data("scheme api response missing `meta`".into()))?;
    let records = map_records(env.data)?;
    Ok(SchemeHistory {
        meta: map_meta(meta)?,
        data: if records.is_empty() {
            None
        } else {
            Some(records)
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> SchemeApiEnvelope {
        serde_json::from_str(json).unwrap()
    }

    const FULL: &str = r#"{
        "meta": {
            "fund_house": "Aditya Birla Sun Life Mutual Fund",
            "scheme_type": "Open Ended Schemes",
            "scheme_category": "Debt Scheme - Banking and PSU Fund",
            "scheme_code": 119598,
            "scheme_name": "Aditya Birla Sun Life Banking & PSU Debt Fund"
        },
        "data": [
            {"date": "29-08-2026", "nav": "345.77160"},
            {"date": "28-08-2026", "nav": "345.11020"},
            {"date": "21-03-2013", "nav": "100.00000"}
        ]
    }"#;

    #[test]
    fn details_takes_the_oldest_record_as_start_date() {
        let details = parse_details(envelope(FULL)).unwrap();
        assert_eq!(details.meta.scheme_code, "119598");
        assert_eq!(details.scheme_start_date.date, "21-03-2013");
        assert_eq!(details.scheme_start_date.nav, "100.00000");
    }

    #[test]
    fn history_keeps_upstream_order() {
        let history = parse_history(envelope(FULL)).unwrap();
        let data = history.data.unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0].date, "29-08-2026");
        assert_eq!(data[2].date, "21-03-2013");
    }

    #[test]
    fn empty_series_becomes_the_unavailable_sentinel() {
        let json = r#"{
            "meta": {
                "fund_house": "X", "scheme_type": "Y", "scheme_category": "Z",
                "scheme_code": "100001", "scheme_name": "New Fund"
            },
            "data": []
        }"#;
        let history = parse_history(envelope(json)).unwrap();
        assert_eq!(history.data, None);
    }

    #[test]
    fn missing_meta_is_an_error() {
        let err = parse_details(envelope(r#"{"data": []}"#)).unwrap_err();
        assert!(err.to_string().contains("missing `meta`"));
    }

    #[test]
    fn empty_series_fails_details() {
        let json = r#"{
            "meta": {
                "fund_house": "X", "scheme_type": "Y", "scheme_category": "Z",
                "scheme_code": "100001", "scheme_name": "New Fund"
            },
            "data": []
        }"#;
        assert!(parse_details(envelope(json)).is_err());
    }
}

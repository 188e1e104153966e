//! Derived figures from a quote and a unit balance: market value of held
//! units, and absolute/annualised SIP returns.
//!
//! These are pure functions over an already-fetched [`Quote`]; the
//! [`Scheme`](crate::Scheme) facade wires them to a live quote fetch.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{MfError, Quote, ToJson};

/// A quote enriched with the market value of a unit balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceValue {
    #[serde(flatten)]
    pub quote: Quote,
    /// `units * nav`, rounded to two decimal places.
    pub balance_units_value: String,
}

/// A quote enriched with SIP return figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipReturns {
    #[serde(flatten)]
    pub quote: Quote,
    /// `months * monthly_sip`, two decimal places.
    pub initial_investment: String,
    /// `units * nav`, two decimal places.
    pub market_value: String,
    /// Absolute return in percent, rounded to two decimal places.
    pub absolute_return_pct: f64,
    /// Annualised (compound-growth) return in percent, rounded to two
    /// decimal places.
    pub annualised_return_pct: f64,
}

impl ToJson for BalanceValue {}
impl ToJson for SipReturns {}

pub(crate) fn parse_nav(nav: &str) -> Result<Decimal, MfError> {
    Decimal::from_str(nav.trim())
        .map_err(|e| MfError::Data(format!("nav `{nav}` is not a decimal: {e}")))
}

/// The market value of `units` at the quoted NAV.
pub fn balance_value(quote: Quote, units: Decimal) -> Result<BalanceValue, MfError> {
    let nav = parse_nav(&quote.nav)?;
    let value = (units * nav).round_dp(2);
    Ok(BalanceValue {
        quote,
        balance_units_value: format!("{value:.2}"),
    })
}

/// Absolute and annualised SIP returns for `units` accumulated by paying
/// `monthly_sip` for `months` months.
///
/// The initial investment is `months * monthly_sip` and the market value is
/// `units * nav`. Annualised return uses the compound-growth formula
/// `(mv / ii) ^ (12 / months) - 1`, which is undefined for a non-positive
/// ratio, so degenerate inputs are rejected instead of producing NaN:
/// a zero/negative investment yields [`MfError::ZeroInvestment`] and a
/// non-positive market value yields [`MfError::NonPositiveGrowth`].
pub fn sip_returns(
    quote: Quote,
    units: Decimal,
    monthly_sip: Decimal,
    months: u32,
) -> Result<SipReturns, MfError> {
    let initial_investment = (monthly_sip * Decimal::from(months)).round_dp(2);
    if initial_investment <= Decimal::ZERO {
        return Err(MfError::ZeroInvestment);
    }

    let nav = parse_nav(&quote.nav)?;
    let market_value = (units * nav).round_dp(2);
    if market_value <= Decimal::ZERO {
        return Err(MfError::NonPositiveGrowth);
    }

    let absolute = ((market_value - initial_investment) / initial_investment
        * Decimal::from(100))
    .round_dp(2);

    let ratio = (market_value / initial_investment)
        .to_f64()
        .ok_or_else(|| MfError::Data("growth ratio out of f64 range".into()))?;
    let annualised = (ratio.powf(12.0 / f64::from(months)) - 1.0) * 100.0;

    Ok(SipReturns {
        quote,
        initial_investment: format!("{initial_investment:.2}"),
        market_value: format!("{market_value:.2}"),
        absolute_return_pct: absolute
            .to_f64()
            .ok_or_else(|| MfError::Data("absolute return out of f64 range".into()))?,
        annualised_return_pct: round2(annualised),
    })
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

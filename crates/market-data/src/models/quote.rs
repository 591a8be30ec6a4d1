use rust_decimal::Decimal;

/// A raw quote snapshot from a provider, before any per-view policy
/// (filtering, merging, fallback) is applied.
///
/// Fields the upstream omitted default to zero.
#[derive(Clone, Debug, Default)]
pub struct QuoteSnapshot {
    /// Current/closing price
    pub close: Decimal,
    /// Absolute change
    pub change: Decimal,
    /// Percent change
    pub change_percent: Decimal,
    /// Day high
    pub high: Decimal,
    /// Day low
    pub low: Decimal,
}

/// Company profile fields used when merging a stock quote.
#[derive(Clone, Debug, Default)]
pub struct CompanyProfile {
    /// Company display name
    pub name: Option<String>,
    /// Market capitalization in base units (upstream reports millions)
    pub market_cap: Option<Decimal>,
    /// Shares outstanding, used as the volume figure on the dashboard
    pub shares_outstanding: Option<Decimal>,
}

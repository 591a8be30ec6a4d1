use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Candle resolutions supported by the chart views.
///
/// The serialized form matches the Finnhub `resolution` query parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleResolution {
    #[serde(rename = "1")]
    OneMinute,
    #[serde(rename = "5")]
    FiveMinutes,
    #[serde(rename = "15")]
    FifteenMinutes,
    #[serde(rename = "60")]
    OneHour,
    #[default]
    #[serde(rename = "D")]
    Daily,
}

impl CandleResolution {
    /// The upstream query-parameter value for this resolution.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1",
            Self::FiveMinutes => "5",
            Self::FifteenMinutes => "15",
            Self::OneHour => "60",
            Self::Daily => "D",
        }
    }
}

/// A single OHLC chart point.
///
/// Sequences of candles are ordered by `time` ascending, in the same
/// order the upstream time array was returned.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    /// Unix timestamp in seconds
    pub time: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
}

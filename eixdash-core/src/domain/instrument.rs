//! Instrument reference data.

use serde::{Deserialize, Serialize};

/// Static reference entry for a tradable instrument. Identifier fields are
/// optional; futures carry only a ticker, German listings also carry a WKN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentRef {
    pub name: String,
    pub isin: Option<String>,
    pub wkn: Option<String>,
    pub ticker: Option<String>,
    pub exchange: Option<String>,
}

impl InstrumentRef {
    /// Case-insensitive substring match against name, ISIN, WKN, or ticker.
    /// `query` must already be lowercased.
    pub fn matches_query(&self, query: &str) -> bool {
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|v| v.to_lowercase().contains(query))
        };
        self.name.to_lowercase().contains(query)
            || contains(&self.isin)
            || contains(&self.wkn)
            || contains(&self.ticker)
    }

    /// The symbol this instrument trades under: its ticker, or the first
    /// word of its name when no ticker is listed.
    pub fn symbol_key(&self) -> &str {
        match self.ticker.as_deref() {
            Some(ticker) => ticker,
            None => self.name.split_whitespace().next().unwrap_or(""),
        }
    }
}

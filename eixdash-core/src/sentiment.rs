//! Sentiment gauges — fixed catalogue, no computation.

use crate::domain::NetDirection;
use serde::{Deserialize, Serialize};

/// The three markets with a sentiment gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentKey {
    Gold,
    Silver,
    Bitcoin,
}

/// One semicircular gauge on the sentiment strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentGauge {
    pub key: SentimentKey,
    pub label: String,
    pub symbol: String,
    pub long_pct: u32,
    pub short_pct: u32,
    pub long_exposure_eur: f64,
    pub short_exposure_eur: f64,
    pub total_exposure_eur: f64,
    pub net_direction: NetDirection,
}

fn gauge(
    key: SentimentKey,
    label: &str,
    symbol: &str,
    long_pct: u32,
    long_exposure_eur: f64,
    short_exposure_eur: f64,
) -> SentimentGauge {
    SentimentGauge {
        key,
        label: label.to_string(),
        symbol: symbol.to_string(),
        long_pct,
        short_pct: 100 - long_pct,
        long_exposure_eur,
        short_exposure_eur,
        total_exposure_eur: long_exposure_eur + short_exposure_eur,
        net_direction: NetDirection::of(long_exposure_eur - short_exposure_eur),
    }
}

/// The fixed gauges for gold, silver, and bitcoin.
pub fn sentiment_gauges() -> Vec<SentimentGauge> {
    vec![
        gauge(SentimentKey::Gold, "GOLD SENTIMENT", "GC=F", 65, 125000.0, 67500.0),
        gauge(SentimentKey::Silver, "SILVER SENTIMENT", "SI=F", 42, 58000.0, 80000.0),
        gauge(SentimentKey::Bitcoin, "CRYPTO SENTIMENT", "BTCUSD", 78, 340000.0, 96000.0),
    ]
}

//! View models handed to the dashboard UI.

use super::filter::{PanelFilter, PanelId};
use super::trade::PanelTrade;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One point of a panel's intraday price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Hour-of-day label.
    pub t: String,
    pub v: f64,
}

/// Long/short book split of a panel, percentages summing to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSplit {
    pub long_pct: u32,
    pub short_pct: u32,
    pub long_eur: f64,
    pub short_eur: f64,
}

/// Everything a single panel renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelViewModel {
    pub id: PanelId,
    pub filter: PanelFilter,
    pub title: String,
    pub symbol_label: String,
    pub price: f64,
    pub change_pct: f64,
    /// Leveraged non-commodity ETP positions have no mock series defined.
    pub chart_hidden: bool,
    pub chart: Vec<ChartPoint>,
    pub positions: PositionSplit,
    pub trades: Vec<PanelTrade>,
}

/// One entry of the header ticker strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerItem {
    pub key: String,
    pub label: String,
    pub price: f64,
    pub change_pct: f64,
}

/// Dashboard header: title, node label, ticker strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderData {
    pub header_title: String,
    pub node_label: String,
    pub tickers: Vec<TickerItem>,
}

/// Which way a book leans, by sign of net exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NetDirection {
    NetLong,
    NetShort,
    Neutral,
}

impl NetDirection {
    /// Classify a net exposure amount.
    pub fn of(net_eur: f64) -> NetDirection {
        if net_eur > 0.0 {
            NetDirection::NetLong
        } else if net_eur < 0.0 {
            NetDirection::NetShort
        } else {
            NetDirection::Neutral
        }
    }
}

impl fmt::Display for NetDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NetDirection::NetLong => "NET LONG",
            NetDirection::NetShort => "NET SHORT",
            NetDirection::Neutral => "NEUTRAL",
        })
    }
}

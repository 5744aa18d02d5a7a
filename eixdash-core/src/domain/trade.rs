//! Trade entities: the per-panel intraday trade list and the cross-panel
//! open-trade universe.

use super::filter::{CommodityType, Direction, LeverageMultiplier};
use super::instrument::InstrumentRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A synthetic intraday trade shown in a panel's recent-trades card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelTrade {
    pub id: String,
    /// Intraday HH:MM label.
    pub ts: String,
    pub symbol: String,
    pub side: Direction,
    pub size: u32,
    pub price: f64,
    pub pnl_eur_unrealized: f64,
}

/// Desk basket an open trade is booked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basket {
    /// Berlin desk.
    #[serde(rename = "EIX_B")]
    EixB,
    /// Munich desk.
    #[serde(rename = "EIX_M")]
    EixM,
}

impl fmt::Display for Basket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Basket::EixB => "EIX_B",
            Basket::EixM => "EIX_M",
        })
    }
}

/// An open position in the cached cross-panel universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenTrade {
    pub id: String,
    pub opened_at: DateTime<Utc>,
    pub symbol: String,
    pub instrument: InstrumentRef,
    pub side: Direction,
    pub leverage_multiplier: Option<LeverageMultiplier>,
    pub size: u32,
    pub entry_price: f64,
    pub mark_price: f64,
    /// Notional value: size x mark price x leverage factor.
    pub exposure_eur: f64,
    pub pnl_eur: f64,
    pub basket: Basket,
    pub commodity_type: Option<CommodityType>,
}

/// Sort orders for open-trade listings. `None` keeps generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSort {
    Newest,
    LargestExposure,
    Pnl,
}

impl std::str::FromStr for TradeSort {
    type Err = super::filter::InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEWEST" => Ok(TradeSort::Newest),
            "LARGEST_EXPOSURE" => Ok(TradeSort::LargestExposure),
            "PNL" => Ok(TradeSort::Pnl),
            other => Err(super::filter::InvalidFilterValue {
                field: "sort order",
                value: other.to_string(),
            }),
        }
    }
}

//! Panel filter model — the composable filter state behind each dashboard panel.
//!
//! Leverage and commodity selection are sum types: a filter cannot carry a
//! multiplier without being leveraged, or a commodity type without being in
//! commodity mode. The one remaining cross-field rule (stocks are never
//! leveraged) is re-established by `PanelFilter::apply` after every change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a string does not name a valid value for a filter field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized {field} value: {value:?}")]
pub struct InvalidFilterValue {
    pub field: &'static str,
    pub value: String,
}

impl InvalidFilterValue {
    fn new(field: &'static str, value: &str) -> Self {
        Self { field, value: value.to_string() }
    }
}

/// Instrument category of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetClass {
    Stock,
    Etp,
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetClass::Stock => "STOCK",
            AssetClass::Etp => "ETP",
        })
    }
}

impl FromStr for AssetClass {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STOCK" => Ok(AssetClass::Stock),
            "ETP" => Ok(AssetClass::Etp),
            other => Err(InvalidFilterValue::new("asset class", other)),
        }
    }
}

/// Position direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Long => Direction::Short,
            Direction::Short => Direction::Long,
        }
    }

    /// +1 for long, -1 for short. Used when signing P&L.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Long => 1.0,
            Direction::Short => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Long => "LONG",
            Direction::Short => "SHORT",
        })
    }
}

impl FromStr for Direction {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LONG" => Ok(Direction::Long),
            "SHORT" => Ok(Direction::Short),
            other => Err(InvalidFilterValue::new("direction", other)),
        }
    }
}

/// Leverage factor offered for leveraged ETPs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeverageMultiplier {
    #[serde(rename = "2x")]
    X2,
    #[serde(rename = "3x")]
    X3,
    #[serde(rename = "4x")]
    X4,
    #[serde(rename = "5x")]
    X5,
}

impl LeverageMultiplier {
    pub fn factor(self) -> f64 {
        match self {
            LeverageMultiplier::X2 => 2.0,
            LeverageMultiplier::X3 => 3.0,
            LeverageMultiplier::X4 => 4.0,
            LeverageMultiplier::X5 => 5.0,
        }
    }
}

impl fmt::Display for LeverageMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LeverageMultiplier::X2 => "2x",
            LeverageMultiplier::X3 => "3x",
            LeverageMultiplier::X4 => "4x",
            LeverageMultiplier::X5 => "5x",
        })
    }
}

impl FromStr for LeverageMultiplier {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2x" => Ok(LeverageMultiplier::X2),
            "3x" => Ok(LeverageMultiplier::X3),
            "4x" => Ok(LeverageMultiplier::X4),
            "5x" => Ok(LeverageMultiplier::X5),
            other => Err(InvalidFilterValue::new("leverage multiplier", other)),
        }
    }
}

/// Leverage state of a filter. A multiplier exists exactly when leveraged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Leverage {
    Unleveraged,
    Leveraged(LeverageMultiplier),
}

impl Leverage {
    pub fn mode(self) -> LeverageMode {
        match self {
            Leverage::Unleveraged => LeverageMode::Unleveraged,
            Leverage::Leveraged(_) => LeverageMode::Leveraged,
        }
    }

    pub fn multiplier(self) -> Option<LeverageMultiplier> {
        match self {
            Leverage::Unleveraged => None,
            Leverage::Leveraged(m) => Some(m),
        }
    }

    /// 1.0 when unleveraged, the multiplier factor otherwise.
    pub fn factor(self) -> f64 {
        self.multiplier().map_or(1.0, LeverageMultiplier::factor)
    }
}

/// The on/off half of the leverage control (the multiplier is a separate control).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeverageMode {
    Unleveraged,
    Leveraged,
}

impl fmt::Display for LeverageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LeverageMode::Unleveraged => "UNLEVERAGED",
            LeverageMode::Leveraged => "LEVERAGED",
        })
    }
}

impl FromStr for LeverageMode {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNLEVERAGED" => Ok(LeverageMode::Unleveraged),
            "LEVERAGED" => Ok(LeverageMode::Leveraged),
            other => Err(InvalidFilterValue::new("leverage mode", other)),
        }
    }
}

/// Commodity underlyings offered in commodity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommodityType {
    Gold,
    Silver,
    Platinum,
    Copper,
    Oil,
}

impl CommodityType {
    pub const ALL: [CommodityType; 5] = [
        CommodityType::Gold,
        CommodityType::Silver,
        CommodityType::Platinum,
        CommodityType::Copper,
        CommodityType::Oil,
    ];

    /// Futures symbol for this commodity.
    pub fn symbol(self) -> &'static str {
        match self {
            CommodityType::Gold => "GC=F",
            CommodityType::Silver => "SI=F",
            CommodityType::Platinum => "PL=F",
            CommodityType::Copper => "HG=F",
            CommodityType::Oil => "CL=F",
        }
    }

    /// Inverse of `symbol`: the commodity a futures symbol stands for.
    pub fn from_symbol(symbol: &str) -> Option<CommodityType> {
        CommodityType::ALL.into_iter().find(|c| c.symbol() == symbol)
    }
}

impl fmt::Display for CommodityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CommodityType::Gold => "GOLD",
            CommodityType::Silver => "SILVER",
            CommodityType::Platinum => "PLATINUM",
            CommodityType::Copper => "COPPER",
            CommodityType::Oil => "OIL",
        })
    }
}

impl FromStr for CommodityType {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GOLD" => Ok(CommodityType::Gold),
            "SILVER" => Ok(CommodityType::Silver),
            "PLATINUM" => Ok(CommodityType::Platinum),
            "COPPER" => Ok(CommodityType::Copper),
            "OIL" => Ok(CommodityType::Oil),
            other => Err(InvalidFilterValue::new("commodity type", other)),
        }
    }
}

/// Commodity state of a filter. A commodity type exists exactly when in
/// commodity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Commodity {
    NonCommodity,
    Commodity(CommodityType),
}

impl Commodity {
    pub fn mode(self) -> CommodityMode {
        match self {
            Commodity::NonCommodity => CommodityMode::NonCommodity,
            Commodity::Commodity(_) => CommodityMode::Commodity,
        }
    }

    pub fn commodity_type(self) -> Option<CommodityType> {
        match self {
            Commodity::NonCommodity => None,
            Commodity::Commodity(t) => Some(t),
        }
    }
}

/// The on/off half of the commodity control (the type is a separate control).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommodityMode {
    NonCommodity,
    Commodity,
}

impl fmt::Display for CommodityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CommodityMode::NonCommodity => "NON_COMMODITY",
            CommodityMode::Commodity => "COMMODITY",
        })
    }
}

impl FromStr for CommodityMode {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NON_COMMODITY" => Ok(CommodityMode::NonCommodity),
            "COMMODITY" => Ok(CommodityMode::Commodity),
            other => Err(InvalidFilterValue::new("commodity mode", other)),
        }
    }
}

/// One of the three filterable dashboard panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelId {
    A,
    B,
    C,
}

impl PanelId {
    /// Filter each panel starts with: long stock picks on A and B, a short
    /// stock book on C.
    pub fn default_filter(self) -> PanelFilter {
        let direction = match self {
            PanelId::A | PanelId::B => Direction::Long,
            PanelId::C => Direction::Short,
        };
        PanelFilter {
            asset_class: AssetClass::Stock,
            direction,
            leverage: Leverage::Unleveraged,
            commodity: Commodity::NonCommodity,
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PanelId::A => "A",
            PanelId::B => "B",
            PanelId::C => "C",
        })
    }
}

impl FromStr for PanelId {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(PanelId::A),
            "B" => Ok(PanelId::B),
            "C" => Ok(PanelId::C),
            other => Err(InvalidFilterValue::new("panel id", other)),
        }
    }
}

/// A change to one of the six filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
    AssetClass(AssetClass),
    Direction(Direction),
    LeverageMode(LeverageMode),
    LeverageMultiplier(LeverageMultiplier),
    CommodityMode(CommodityMode),
    CommodityType(CommodityType),
}

/// The complete filter state of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PanelFilter {
    pub asset_class: AssetClass,
    pub direction: Direction,
    pub leverage: Leverage,
    pub commodity: Commodity,
}

impl PanelFilter {
    /// Build a filter, normalizing a leveraged stock to unleveraged.
    pub fn new(
        asset_class: AssetClass,
        direction: Direction,
        leverage: Leverage,
        commodity: Commodity,
    ) -> Self {
        let leverage = match asset_class {
            AssetClass::Stock => Leverage::Unleveraged,
            AssetClass::Etp => leverage,
        };
        Self { asset_class, direction, leverage, commodity }
    }

    /// Apply one control change and the consistency resets that follow it.
    ///
    /// - Switching to stocks drops leverage.
    /// - Turning leverage on restores the previous multiplier or defaults to
    ///   2x; stocks stay unleveraged.
    /// - Turning commodity mode on restores the previous type or defaults to
    ///   gold.
    /// - A multiplier or commodity-type change while the respective mode is
    ///   off has no effect.
    pub fn apply(&self, change: FilterChange) -> PanelFilter {
        let mut next = *self;
        match change {
            FilterChange::AssetClass(asset_class) => {
                next.asset_class = asset_class;
                if asset_class == AssetClass::Stock {
                    next.leverage = Leverage::Unleveraged;
                }
            }
            FilterChange::Direction(direction) => next.direction = direction,
            FilterChange::LeverageMode(LeverageMode::Unleveraged) => {
                next.leverage = Leverage::Unleveraged;
            }
            FilterChange::LeverageMode(LeverageMode::Leveraged) => {
                if next.asset_class == AssetClass::Etp {
                    let kept = self.leverage.multiplier().unwrap_or(LeverageMultiplier::X2);
                    next.leverage = Leverage::Leveraged(kept);
                }
            }
            FilterChange::LeverageMultiplier(m) => {
                if let Leverage::Leveraged(_) = next.leverage {
                    next.leverage = Leverage::Leveraged(m);
                }
            }
            FilterChange::CommodityMode(CommodityMode::NonCommodity) => {
                next.commodity = Commodity::NonCommodity;
            }
            FilterChange::CommodityMode(CommodityMode::Commodity) => {
                let kept = self.commodity.commodity_type().unwrap_or(CommodityType::Gold);
                next.commodity = Commodity::Commodity(kept);
            }
            FilterChange::CommodityType(t) => {
                if let Commodity::Commodity(_) = next.commodity {
                    next.commodity = Commodity::Commodity(t);
                }
            }
        }
        next
    }

    /// Canonical pipe-joined form of the six filter fields, with `-` in the
    /// multiplier/commodity slots when absent. This string keys the seeded
    /// generators and the per-panel trade ids.
    pub fn canonical_key(&self) -> String {
        let multiplier = self
            .leverage
            .multiplier()
            .map_or("-".to_string(), |m| m.to_string());
        let commodity = self
            .commodity
            .commodity_type()
            .map_or("-".to_string(), |t| t.to_string());
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.asset_class,
            self.direction,
            self.leverage.mode(),
            multiplier,
            self.commodity.mode(),
            commodity,
        )
    }

    /// Panel heading: the filter fields joined with a bullet separator.
    pub fn title(&self) -> String {
        let leverage = match self.leverage {
            Leverage::Unleveraged => "UNLEVERAGED".to_string(),
            Leverage::Leveraged(m) => format!("LEVERAGED {m}"),
        };
        let mut parts = vec![
            self.asset_class.to_string(),
            self.direction.to_string(),
            leverage,
            self.commodity.mode().to_string(),
        ];
        if let Commodity::Commodity(t) = self.commodity {
            parts.push(t.to_string());
        }
        parts.join(" • ")
    }
}

impl Default for PanelFilter {
    fn default() -> Self {
        PanelId::A.default_filter()
    }
}

/// The current filter of every panel, as passed to the analytics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelFilters {
    pub a: PanelFilter,
    pub b: PanelFilter,
    pub c: PanelFilter,
}

impl PanelFilters {
    pub fn get(&self, id: PanelId) -> &PanelFilter {
        match id {
            PanelId::A => &self.a,
            PanelId::B => &self.b,
            PanelId::C => &self.c,
        }
    }
}

impl Default for PanelFilters {
    fn default() -> Self {
        Self {
            a: PanelId::A.default_filter(),
            b: PanelId::B.default_filter(),
            c: PanelId::C.default_filter(),
        }
    }
}

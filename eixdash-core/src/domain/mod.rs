//! Domain types for the dashboard engine.

pub mod filter;
pub mod instrument;
pub mod trade;
pub mod view;

pub use filter::{
    AssetClass, Commodity, CommodityMode, CommodityType, Direction, FilterChange,
    InvalidFilterValue, Leverage, LeverageMode, LeverageMultiplier, PanelFilter, PanelFilters,
    PanelId,
};
pub use instrument::InstrumentRef;
pub use trade::{Basket, OpenTrade, PanelTrade, TradeSort};
pub use view::{
    ChartPoint, HeaderData, NetDirection, PanelViewModel, PositionSplit, TickerItem,
};

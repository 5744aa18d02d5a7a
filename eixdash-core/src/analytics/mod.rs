//! Exposure aggregation over the cached trade universe.
//!
//! All operations read the same 98-trade snapshot (see `universe`): scope
//! queries match trades against the panels' current filters, the timeline
//! operations narrow by desk basket, commodity, and optionally instrument
//! before bucketing.

mod timeline;
mod universe;

pub use timeline::{build_timeline, ExposurePoint, ExposureSummary, ExposureTimeline, TimeWindow};

use crate::domain::{
    Basket, CommodityType, InstrumentRef, InvalidFilterValue, OpenTrade, PanelFilters, PanelId,
    TradeSort,
};
use chrono::{Local, Timelike};
use std::collections::HashSet;
use std::str::FromStr;
use universe::universe;

/// Which panels' trades a scope query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterScope {
    Panel(PanelId),
    AllPanelsUnion,
}

impl FromStr for FilterScope {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PANEL_A" => Ok(FilterScope::Panel(PanelId::A)),
            "PANEL_B" => Ok(FilterScope::Panel(PanelId::B)),
            "PANEL_C" => Ok(FilterScope::Panel(PanelId::C)),
            "ALL_PANELS_UNION" => Ok(FilterScope::AllPanelsUnion),
            other => Err(InvalidFilterValue { field: "filter scope", value: other.to_string() }),
        }
    }
}

/// Coarse desk selector applied before commodity filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketFilter {
    All,
    /// Berlin desk, basket `EIX_B`.
    Ber,
    /// Munich desk, basket `EIX_M`.
    Mun,
}

impl BasketFilter {
    fn basket(self) -> Option<Basket> {
        match self {
            BasketFilter::All => None,
            BasketFilter::Ber => Some(Basket::EixB),
            BasketFilter::Mun => Some(Basket::EixM),
        }
    }
}

impl FromStr for BasketFilter {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(BasketFilter::All),
            "BER" => Ok(BasketFilter::Ber),
            "MUN" => Ok(BasketFilter::Mun),
            other => Err(InvalidFilterValue { field: "basket filter", value: other.to_string() }),
        }
    }
}

/// Optional restriction to a single commodity's trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommodityFilter {
    All,
    Only(CommodityType),
}

impl FromStr for CommodityFilter {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "ALL" {
            return Ok(CommodityFilter::All);
        }
        s.parse::<CommodityType>().map(CommodityFilter::Only)
    }
}

/// Open trades visible under a scope, with an optional sort. The union
/// scope de-duplicates by trade id, preserving first-seen order.
pub fn open_trades(
    scope: FilterScope,
    filters: &PanelFilters,
    sort: Option<TradeSort>,
) -> Vec<OpenTrade> {
    let mut picked: Vec<OpenTrade> = match scope {
        FilterScope::Panel(id) => {
            let filter = filters.get(id);
            universe()
                .iter()
                .filter(|pt| pt.profile == *filter)
                .map(|pt| pt.trade.clone())
                .collect()
        }
        FilterScope::AllPanelsUnion => {
            let mut seen = HashSet::new();
            universe()
                .iter()
                .filter(|pt| {
                    [filters.a, filters.b, filters.c].contains(&pt.profile)
                        && seen.insert(pt.trade.id.clone())
                })
                .map(|pt| pt.trade.clone())
                .collect()
        }
    };

    match sort {
        Some(TradeSort::Newest) => picked.sort_by(|a, b| b.opened_at.cmp(&a.opened_at)),
        Some(TradeSort::LargestExposure) => {
            picked.sort_by(|a, b| b.exposure_eur.total_cmp(&a.exposure_eur))
        }
        Some(TradeSort::Pnl) => picked.sort_by(|a, b| b.pnl_eur.total_cmp(&a.pnl_eur)),
        None => {}
    }
    picked
}

fn basket_filtered(basket: BasketFilter) -> Vec<OpenTrade> {
    universe()
        .iter()
        .filter(|pt| match basket.basket() {
            Some(b) => pt.trade.basket == b,
            None => true,
        })
        .map(|pt| pt.trade.clone())
        .collect()
}

fn retain_commodity(trades: &mut Vec<OpenTrade>, commodity: CommodityFilter) {
    if let CommodityFilter::Only(c) = commodity {
        trades.retain(|t| t.commodity_type == Some(c));
    }
}

/// Whether a trade belongs to an instrument: its symbol equals the
/// instrument's symbol key, or any identifier present on both sides agrees.
fn matches_instrument(trade: &OpenTrade, instrument: &InstrumentRef) -> bool {
    fn agree(a: &Option<String>, b: &Option<String>) -> bool {
        matches!((a, b), (Some(x), Some(y)) if x == y)
    }
    trade.symbol == instrument.symbol_key()
        || agree(&trade.instrument.isin, &instrument.isin)
        || agree(&trade.instrument.wkn, &instrument.wkn)
        || agree(&trade.instrument.ticker, &instrument.ticker)
}

/// Exposure series and summary for a basket/commodity selection.
pub fn exposure_timeline(
    basket: BasketFilter,
    commodity: CommodityFilter,
    window: TimeWindow,
) -> ExposureTimeline {
    let mut trades = basket_filtered(basket);
    retain_commodity(&mut trades, commodity);
    build_timeline(&trades, window, Local::now().hour())
}

/// Exposure series and summary restricted to a single instrument.
pub fn instrument_exposure(
    instrument: &InstrumentRef,
    basket: BasketFilter,
    commodity: CommodityFilter,
    window: TimeWindow,
) -> ExposureTimeline {
    let mut trades = basket_filtered(basket);
    trades.retain(|t| matches_instrument(t, instrument));
    retain_commodity(&mut trades, commodity);
    build_timeline(&trades, window, Local::now().hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AssetClass, Commodity, Direction, Leverage, LeverageMultiplier, PanelFilter,
    };
    use crate::instruments::search_instruments;

    fn gold_long_filter() -> PanelFilter {
        PanelFilter::new(
            AssetClass::Etp,
            Direction::Long,
            Leverage::Leveraged(LeverageMultiplier::X2),
            Commodity::Commodity(CommodityType::Gold),
        )
    }

    #[test]
    fn single_panel_scope_matches_its_profile_only() {
        let filters = PanelFilters { a: gold_long_filter(), ..PanelFilters::default() };
        let trades = open_trades(FilterScope::Panel(PanelId::A), &filters, None);
        assert_eq!(trades.len(), 7);
        assert!(trades.iter().all(|t| t.symbol == "GC=F" && t.side == Direction::Long));
    }

    #[test]
    fn default_panels_share_the_long_stock_profile() {
        let filters = PanelFilters::default();
        let a = open_trades(FilterScope::Panel(PanelId::A), &filters, None);
        let b = open_trades(FilterScope::Panel(PanelId::B), &filters, None);
        assert_eq!(a, b);
        assert!(a.iter().all(|t| t.symbol == "NVDA"));
    }

    #[test]
    fn union_deduplicates_identical_panels() {
        // A and B default to the same filter; the union must not double-count.
        let filters = PanelFilters::default();
        let union = open_trades(FilterScope::AllPanelsUnion, &filters, None);
        assert_eq!(union.len(), 14);
        let mut ids: Vec<&str> = union.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), union.len());
    }

    #[test]
    fn union_members_match_some_panel() {
        let filters = PanelFilters { c: gold_long_filter(), ..PanelFilters::default() };
        let union = open_trades(FilterScope::AllPanelsUnion, &filters, None);
        let per_panel: Vec<OpenTrade> = [PanelId::A, PanelId::B, PanelId::C]
            .into_iter()
            .flat_map(|id| open_trades(FilterScope::Panel(id), &filters, None))
            .collect();
        for trade in &union {
            assert!(per_panel.iter().any(|t| t.id == trade.id));
        }
    }

    #[test]
    fn sort_orders_are_descending() {
        let filters = PanelFilters { a: gold_long_filter(), ..PanelFilters::default() };
        let scope = FilterScope::AllPanelsUnion;

        let newest = open_trades(scope, &filters, Some(TradeSort::Newest));
        assert!(newest.windows(2).all(|w| w[0].opened_at >= w[1].opened_at));

        let largest = open_trades(scope, &filters, Some(TradeSort::LargestExposure));
        assert!(largest.windows(2).all(|w| w[0].exposure_eur >= w[1].exposure_eur));

        let pnl = open_trades(scope, &filters, Some(TradeSort::Pnl));
        assert!(pnl.windows(2).all(|w| w[0].pnl_eur >= w[1].pnl_eur));
    }

    #[test]
    fn baskets_partition_the_universe() {
        let all = exposure_timeline(BasketFilter::All, CommodityFilter::All, TimeWindow::All);
        let ber = exposure_timeline(BasketFilter::Ber, CommodityFilter::All, TimeWindow::All);
        let mun = exposure_timeline(BasketFilter::Mun, CommodityFilter::All, TimeWindow::All);
        assert_eq!(all.summary.open_trades_count, 98);
        assert_eq!(
            ber.summary.open_trades_count + mun.summary.open_trades_count,
            all.summary.open_trades_count
        );
    }

    #[test]
    fn commodity_filter_narrows_to_one_commodity() {
        let gold =
            exposure_timeline(BasketFilter::All, CommodityFilter::Only(CommodityType::Gold), TimeWindow::All);
        // Two gold profiles x 7 trades.
        assert_eq!(gold.summary.open_trades_count, 14);
    }

    #[test]
    fn summary_identities_hold_for_every_selection() {
        for basket in [BasketFilter::All, BasketFilter::Ber, BasketFilter::Mun] {
            for window in TimeWindow::ALL_WINDOWS {
                let tl = exposure_timeline(basket, CommodityFilter::All, window);
                assert_eq!(
                    tl.summary.current_net_eur,
                    tl.summary.current_long_eur - tl.summary.current_short_eur
                );
                assert_eq!(
                    tl.summary.current_gross_eur,
                    tl.summary.current_long_eur + tl.summary.current_short_eur
                );
                assert_eq!(tl.series.len(), window.bucket_count());
            }
        }
    }

    #[test]
    fn instrument_restriction_matches_by_identifier() {
        let nvidia = &search_instruments("US67066G1040")[0];
        let tl = instrument_exposure(nvidia, BasketFilter::All, CommodityFilter::All, TimeWindow::All);
        // NVDA backs exactly one profile.
        assert_eq!(tl.summary.open_trades_count, 7);

        let gold_future = &search_instruments("Gold Futures")[0];
        let gold =
            instrument_exposure(gold_future, BasketFilter::All, CommodityFilter::All, TimeWindow::All);
        // Long and short gold profiles share the GC=F symbol.
        assert_eq!(gold.summary.open_trades_count, 14);
    }

    #[test]
    fn absent_identifiers_never_match() {
        // A made-up instrument with no identifiers in common with the
        // universe must select nothing, even though many trades also have
        // absent ISINs.
        let unknown = InstrumentRef {
            name: "Unlisted Warrant".into(),
            isin: None,
            wkn: None,
            ticker: None,
            exchange: None,
        };
        let tl =
            instrument_exposure(&unknown, BasketFilter::All, CommodityFilter::All, TimeWindow::All);
        assert_eq!(tl.summary.open_trades_count, 0);
    }

    #[test]
    fn scope_and_filter_tokens_parse() {
        assert_eq!("PANEL_B".parse::<FilterScope>().unwrap(), FilterScope::Panel(PanelId::B));
        assert_eq!("ALL_PANELS_UNION".parse::<FilterScope>().unwrap(), FilterScope::AllPanelsUnion);
        assert_eq!("BER".parse::<BasketFilter>().unwrap(), BasketFilter::Ber);
        assert_eq!(
            "SILVER".parse::<CommodityFilter>().unwrap(),
            CommodityFilter::Only(CommodityType::Silver)
        );
        assert!("EIX".parse::<BasketFilter>().is_err());
    }
}

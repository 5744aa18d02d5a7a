//! Panel data resolution: symbol/price lookup, chart series, position split.
//!
//! The chart walk and commodity price perturbation are intentionally
//! unseeded (fresh noise on every resolution), while the position split and
//! trade list are seeded from the filter content and reproduce exactly.

use crate::domain::{
    AssetClass, ChartPoint, Commodity, CommodityType, Direction, HeaderData, PanelFilter,
    PanelId, PanelViewModel, PositionSplit, TickerItem,
};
use crate::rng::PanelRng;
use crate::synth::synth_trades;
use rand::Rng;

/// Hour labels of the nine-point intraday series.
const CHART_HOURS: [&str; 9] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
];

/// Per-step volatility of the stock-mode chart walk.
const STOCK_CHART_VOLATILITY: f64 = 0.008;

/// Reference quote for a commodity: futures symbol, base price, walk volatility.
pub fn commodity_quote(commodity: CommodityType) -> (&'static str, f64, f64) {
    match commodity {
        CommodityType::Gold => ("GC=F", 2648.0, 0.0015),
        CommodityType::Silver => ("SI=F", 31.35, 0.002),
        CommodityType::Platinum => ("PL=F", 980.0, 0.0018),
        CommodityType::Copper => ("HG=F", 4.25, 0.0025),
        CommodityType::Oil => ("CL=F", 72.5, 0.003),
    }
}

/// Fixed quote table for non-commodity panels: symbol, price, change %.
fn stock_quote(asset_class: AssetClass, direction: Direction) -> (&'static str, f64, f64) {
    match (asset_class, direction) {
        (AssetClass::Stock, Direction::Long) => ("NVDA", 142.5, 1.2),
        (AssetClass::Stock, Direction::Short) => ("TSLA", 248.3, -0.8),
        (AssetClass::Etp, Direction::Long) => ("SPY", 585.2, 0.35),
        (AssetClass::Etp, Direction::Short) => ("SDS", 12.48, -0.12),
    }
}

/// Display symbol, price, and change % for a filter. Commodity prices are
/// perturbed by up to +-1% around the base; the fixed table is returned
/// verbatim.
fn resolve_quote(filter: &PanelFilter) -> (&'static str, f64, f64) {
    if let Commodity::Commodity(c) = filter.commodity {
        let (symbol, base, _) = commodity_quote(c);
        let price = base * (1.0 + (rand::thread_rng().gen::<f64>() - 0.5) * 0.02);
        return (symbol, price, (price / base - 1.0) * 100.0);
    }
    stock_quote(filter.asset_class, filter.direction)
}

/// Whether a panel has no mock series: non-commodity and non-stock.
pub fn chart_hidden(filter: &PanelFilter) -> bool {
    filter.commodity == Commodity::NonCommodity && filter.asset_class != AssetClass::Stock
}

/// Nine-point multiplicative random walk from `base`, values rounded to
/// cents.
fn chart_points(base: f64, volatility: f64) -> Vec<ChartPoint> {
    let mut rng = rand::thread_rng();
    let mut v = base;
    CHART_HOURS
        .iter()
        .map(|t| {
            v *= 1.0 + (rng.gen::<f64>() - 0.48) * volatility;
            ChartPoint { t: (*t).to_string(), v: (v * 100.0).round() / 100.0 }
        })
        .collect()
}

/// Chart series for a filter: commodity walk, stock walk, or empty.
fn chart_series(filter: &PanelFilter) -> Vec<ChartPoint> {
    if chart_hidden(filter) {
        return Vec::new();
    }
    if let Commodity::Commodity(c) = filter.commodity {
        let (_, base, volatility) = commodity_quote(c);
        return chart_points(base, volatility);
    }
    if filter.asset_class == AssetClass::Stock {
        let (_, price, _) = stock_quote(filter.asset_class, filter.direction);
        return chart_points(price, STOCK_CHART_VOLATILITY);
    }
    Vec::new()
}

/// Seeded long/short split of a panel's book. Percentages sum to 100.
pub fn position_split(filter: &PanelFilter) -> PositionSplit {
    let mut rng = PanelRng::from_key(&filter.canonical_key());
    let long_pct = (35.0 + rng.next_f64() * 45.0).floor() as u32;
    let short_pct = 100 - long_pct;
    let long_eur = (60000.0 + rng.next_f64() * 120000.0).floor();
    let short_eur = (40000.0 + rng.next_f64() * 100000.0).floor();
    PositionSplit { long_pct, short_pct, long_eur, short_eur }
}

/// Resolve everything one panel renders from its current filter.
pub fn panel_data(panel_id: PanelId, filter: &PanelFilter) -> PanelViewModel {
    let (symbol_label, price, change_pct) = resolve_quote(filter);
    PanelViewModel {
        id: panel_id,
        filter: *filter,
        title: filter.title(),
        symbol_label: symbol_label.to_string(),
        price,
        change_pct,
        chart_hidden: chart_hidden(filter),
        chart: chart_series(filter),
        positions: position_split(filter),
        trades: synth_trades(filter, symbol_label),
    }
}

/// Static dashboard header with the illustrative ticker strip.
pub fn header_data() -> HeaderData {
    let ticker = |key: &str, label: &str, price: f64, change_pct: f64| TickerItem {
        key: key.to_string(),
        label: label.to_string(),
        price,
        change_pct,
    };
    HeaderData {
        header_title: "EIX Risk Dashboard".to_string(),
        node_label: "NODE: FRANKFURT-DE-01".to_string(),
        tickers: vec![
            ticker("GC=F", "Gold", 2654.2, 0.42),
            ticker("SI=F", "Silver", 31.4, -0.18),
            ticker("CL=F", "Oil", 72.45, -0.34),
            ticker("GDAXI", "DAX", 19420.0, 0.38),
            ticker("IXIC", "NASDAQ", 18245.0, 0.62),
            ticker("BTC", "Bitcoin", 97320.0, 1.24),
            ticker("ETH", "Ethereum", 3578.0, 0.89),
            ticker("PL=F", "Platinum", 982.5, 0.12),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Leverage, LeverageMultiplier};

    fn gold_etp() -> PanelFilter {
        PanelFilter::new(
            AssetClass::Etp,
            Direction::Long,
            Leverage::Leveraged(LeverageMultiplier::X2),
            Commodity::Commodity(CommodityType::Gold),
        )
    }

    fn plain_etp() -> PanelFilter {
        PanelFilter::new(
            AssetClass::Etp,
            Direction::Long,
            Leverage::Leveraged(LeverageMultiplier::X2),
            Commodity::NonCommodity,
        )
    }

    #[test]
    fn commodity_panels_always_chart() {
        let vm = panel_data(PanelId::B, &gold_etp());
        assert!(!vm.chart_hidden);
        assert_eq!(vm.chart.len(), 9);
        assert_eq!(vm.chart[0].t, "09:00");
        assert_eq!(vm.chart[8].t, "17:00");
    }

    #[test]
    fn leveraged_plain_etp_hides_chart() {
        let vm = panel_data(PanelId::B, &plain_etp());
        assert!(vm.chart_hidden);
        assert!(vm.chart.is_empty());
    }

    #[test]
    fn stock_short_resolves_fixed_tsla_quote() {
        let vm = panel_data(PanelId::C, &PanelId::C.default_filter());
        assert_eq!(vm.symbol_label, "TSLA");
        assert_eq!(vm.price, 248.3);
        assert_eq!(vm.change_pct, -0.8);
        assert!(!vm.chart_hidden);
        assert_eq!(vm.chart.len(), 9);
    }

    #[test]
    fn commodity_price_stays_within_one_percent() {
        for _ in 0..50 {
            let vm = panel_data(PanelId::A, &gold_etp());
            assert_eq!(vm.symbol_label, "GC=F");
            assert!(vm.price >= 2648.0 * 0.99);
            assert!(vm.price <= 2648.0 * 1.01);
            assert!((vm.change_pct - (vm.price / 2648.0 - 1.0) * 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn split_percentages_sum_to_one_hundred() {
        for filter in [gold_etp(), plain_etp(), PanelId::A.default_filter()] {
            let split = position_split(&filter);
            assert_eq!(split.long_pct + split.short_pct, 100);
            assert!((35..80).contains(&split.long_pct));
            assert!((60000.0..180000.0).contains(&split.long_eur));
            assert!((40000.0..140000.0).contains(&split.short_eur));
        }
    }

    #[test]
    fn seeded_parts_reproduce_across_calls() {
        let filter = gold_etp();
        let a = panel_data(PanelId::A, &filter);
        let b = panel_data(PanelId::A, &filter);
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.trades, b.trades);
        assert_eq!(a.title, b.title);
    }

    #[test]
    fn header_has_eight_tickers() {
        let header = header_data();
        assert_eq!(header.tickers.len(), 8);
        assert_eq!(header.header_title, "EIX Risk Dashboard");
        assert_eq!(header.tickers[0].key, "GC=F");
    }
}

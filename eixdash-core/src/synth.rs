//! Per-filter synthetic trade generation.
//!
//! Every panel shows five recent trades derived entirely from its filter:
//! the canonical filter key seeds the generator, so re-resolving the same
//! filter reproduces the same list. Sides alternate starting from the
//! filter's own direction; sizes and timestamps are fixed.

use crate::domain::{PanelFilter, PanelTrade};
use crate::rng::PanelRng;

/// Intraday timestamps of the synthetic trades, newest first.
const TRADE_TIMES: [&str; 5] = ["13:42", "12:18", "11:55", "10:33", "09:22"];

/// Base contract counts, scaled up x10 for NVDA's share-sized lots.
const BASE_SIZES: [u32; 5] = [2, 1, 3, 2, 1];

/// Reference price for the synthetic fills of a display symbol.
fn base_price(symbol_label: &str) -> f64 {
    if symbol_label.contains('=') {
        2654.0
    } else {
        match symbol_label {
            "NVDA" => 142.0,
            "TSLA" => 248.0,
            _ => 585.0,
        }
    }
}

/// Deterministic five-trade list for a panel filter and its display symbol.
pub fn synth_trades(filter: &PanelFilter, symbol_label: &str) -> Vec<PanelTrade> {
    let key = filter.canonical_key();
    let mut rng = PanelRng::from_key(&key);

    let base = base_price(symbol_label);
    let size_multiplier = if symbol_label == "NVDA" { 10 } else { 1 };

    TRADE_TIMES
        .iter()
        .enumerate()
        .map(|(i, ts)| {
            let side = if i % 2 == 0 {
                filter.direction
            } else {
                filter.direction.opposite()
            };
            let price = base * (0.99 + rng.next_f64() * 0.03);
            let pnl = ((rng.next_f64() - 0.4) * 400.0).floor();
            PanelTrade {
                id: format!("{key}-{i}"),
                ts: (*ts).to_string(),
                symbol: symbol_label.to_string(),
                side,
                size: BASE_SIZES[i] * size_multiplier,
                price,
                pnl_eur_unrealized: pnl,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetClass, Commodity, Direction, Leverage, PanelId};

    #[test]
    fn produces_five_trades_with_fixed_timestamps() {
        let filter = PanelId::A.default_filter();
        let trades = synth_trades(&filter, "NVDA");
        assert_eq!(trades.len(), 5);
        let ts: Vec<&str> = trades.iter().map(|t| t.ts.as_str()).collect();
        assert_eq!(ts, TRADE_TIMES);
    }

    #[test]
    fn sides_alternate_from_filter_direction() {
        let filter = PanelId::C.default_filter();
        let trades = synth_trades(&filter, "TSLA");
        let sides: Vec<Direction> = trades.iter().map(|t| t.side).collect();
        assert_eq!(
            sides,
            [
                Direction::Short,
                Direction::Long,
                Direction::Short,
                Direction::Long,
                Direction::Short,
            ]
        );
    }

    #[test]
    fn nvda_lots_are_ten_times_larger() {
        let filter = PanelId::A.default_filter();
        let nvda: Vec<u32> = synth_trades(&filter, "NVDA").iter().map(|t| t.size).collect();
        assert_eq!(nvda, [20, 10, 30, 20, 10]);
        let gold: Vec<u32> = synth_trades(&filter, "GC=F").iter().map(|t| t.size).collect();
        assert_eq!(gold, [2, 1, 3, 2, 1]);
    }

    #[test]
    fn equal_filters_yield_identical_lists() {
        let a = PanelFilter::new(
            AssetClass::Etp,
            Direction::Long,
            Leverage::Unleveraged,
            Commodity::NonCommodity,
        );
        let b = a;
        assert_eq!(synth_trades(&a, "SPY"), synth_trades(&b, "SPY"));
    }

    #[test]
    fn prices_stay_near_base() {
        let filter = PanelId::A.default_filter();
        for trade in synth_trades(&filter, "TSLA") {
            assert!(trade.price >= 248.0 * 0.99);
            assert!(trade.price < 248.0 * 1.02);
        }
    }

    #[test]
    fn pnl_stays_in_drawn_range() {
        let filter = PanelId::A.default_filter();
        for trade in synth_trades(&filter, "SPY") {
            assert!(trade.pnl_eur_unrealized >= -160.0);
            assert!(trade.pnl_eur_unrealized < 240.0);
        }
    }

    #[test]
    fn ids_embed_the_canonical_key() {
        let filter = PanelId::A.default_filter();
        let trades = synth_trades(&filter, "NVDA");
        assert_eq!(trades[0].id, format!("{}-0", filter.canonical_key()));
        assert_eq!(trades[4].id, format!("{}-4", filter.canonical_key()));
    }
}

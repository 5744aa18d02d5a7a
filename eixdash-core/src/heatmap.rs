//! Exposure heatmap — per-instrument long/short totals with derived net
//! direction, sorted by absolute total exposure.

use crate::domain::NetDirection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Instrument category of a heatmap tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TileKind {
    Commodity,
    Crypto,
    Index,
}

/// One heatmap tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapTile {
    pub id: String,
    pub kind: TileKind,
    pub key: String,
    pub label: String,
    pub ticker: String,
    pub long_exposure_eur: f64,
    pub short_exposure_eur: f64,
    pub total_exposure_eur: f64,
    pub net_exposure_eur: f64,
    pub net_direction: NetDirection,
}

/// The full heatmap: tiles sorted by descending absolute total exposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapData {
    pub tiles: Vec<HeatmapTile>,
    /// Scale anchor for tile coloring, at least 1.
    pub max_abs_total_exposure_eur: f64,
    pub updated_at: DateTime<Utc>,
}

fn tile(
    id: &str,
    kind: TileKind,
    key: &str,
    label: &str,
    ticker: &str,
    long_eur: f64,
    short_eur: f64,
) -> HeatmapTile {
    let net_exposure_eur = long_eur - short_eur;
    HeatmapTile {
        id: id.to_string(),
        kind,
        key: key.to_string(),
        label: label.to_string(),
        ticker: ticker.to_string(),
        long_exposure_eur: long_eur,
        short_exposure_eur: short_eur,
        total_exposure_eur: long_eur + short_eur,
        net_exposure_eur,
        net_direction: NetDirection::of(net_exposure_eur),
    }
}

/// The fixed heatmap snapshot.
pub fn exposure_heatmap() -> HeatmapData {
    let mut tiles = vec![
        tile("gold", TileKind::Commodity, "GOLD", "Gold", "GC=F", 185000.0, 42000.0),
        tile("silver", TileKind::Commodity, "SILVER", "Silver", "SI=F", 78000.0, 95000.0),
        tile("oil", TileKind::Commodity, "OIL", "Oil", "CL=F", 62000.0, 31000.0),
        tile("platinum", TileKind::Commodity, "PLATINUM", "Platinum", "PL=F", 45000.0, 12000.0),
        tile("copper", TileKind::Commodity, "COPPER", "Copper", "HG=F", 28000.0, 35000.0),
        tile("dax", TileKind::Index, "DAX", "DAX", "^GDAXI", 125000.0, 45000.0),
        tile("nasdaq", TileKind::Index, "NASDAQ", "NASDAQ", "^IXIC", 98000.0, 72000.0),
        tile("btc", TileKind::Crypto, "BTC", "Bitcoin", "BTCUSD", 340000.0, 96000.0),
        tile("eth", TileKind::Crypto, "ETH", "Ethereum", "ETHUSD", 89000.0, 42000.0),
        tile("sol", TileKind::Crypto, "SOL", "Solana", "SOLUSD", 55000.0, 18000.0),
        tile("bnb", TileKind::Crypto, "BNB", "BNB", "BNBUSD", 22000.0, 8000.0),
        tile("xrp", TileKind::Crypto, "XRP", "XRP", "XRPUSD", 15000.0, 9000.0),
    ];

    tiles.sort_by(|a, b| {
        b.total_exposure_eur
            .abs()
            .total_cmp(&a.total_exposure_eur.abs())
    });

    let max_abs_total_exposure_eur = tiles
        .iter()
        .map(|t| t.total_exposure_eur.abs())
        .fold(1.0_f64, f64::max);

    HeatmapData { tiles, max_abs_total_exposure_eur, updated_at: Utc::now() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_are_sorted_by_absolute_total() {
        let data = exposure_heatmap();
        assert_eq!(data.tiles.len(), 12);
        assert!(data
            .tiles
            .windows(2)
            .all(|w| w[0].total_exposure_eur.abs() >= w[1].total_exposure_eur.abs()));
        assert_eq!(data.tiles[0].id, "btc");
    }

    #[test]
    fn derived_fields_are_consistent() {
        for t in exposure_heatmap().tiles {
            assert_eq!(t.total_exposure_eur, t.long_exposure_eur + t.short_exposure_eur);
            assert_eq!(t.net_exposure_eur, t.long_exposure_eur - t.short_exposure_eur);
            assert_eq!(t.net_direction, NetDirection::of(t.net_exposure_eur));
        }
    }

    #[test]
    fn max_abs_matches_the_top_tile() {
        let data = exposure_heatmap();
        assert_eq!(data.max_abs_total_exposure_eur, 436000.0);
    }

    #[test]
    fn short_heavy_tiles_read_net_short() {
        let data = exposure_heatmap();
        let silver = data.tiles.iter().find(|t| t.id == "silver").unwrap();
        assert_eq!(silver.net_direction, NetDirection::NetShort);
        let copper = data.tiles.iter().find(|t| t.id == "copper").unwrap();
        assert_eq!(copper.net_direction, NetDirection::NetShort);
    }
}

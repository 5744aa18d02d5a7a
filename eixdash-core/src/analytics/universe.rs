//! The cached cross-panel trade universe.
//!
//! Fourteen filter profiles, each mapped to one underlying symbol, are
//! expanded into seven open trades apiece at first access. Price and P&L
//! perturbation is deliberately unseeded (unlike the per-panel
//! synthesizer), so the universe differs run to run but is fixed for the
//! process lifetime: it is built once behind a `OnceLock` and only ever
//! read afterwards.

use crate::domain::{
    AssetClass, Basket, Commodity, CommodityType, Direction, Leverage, LeverageMultiplier,
    OpenTrade, PanelFilter,
};
use crate::instruments::instrument_for_symbol;
use crate::panel::commodity_quote;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::sync::OnceLock;

/// A universe trade together with the profile that generated it, kept for
/// scope matching and stripped from everything returned to callers.
#[derive(Debug, Clone)]
pub(crate) struct ProfiledTrade {
    pub profile: PanelFilter,
    pub trade: OpenTrade,
}

/// Trade counts per profile, oldest last.
const PROFILE_SIZES: [u32; 7] = [10, 5, 20, 8, 15, 12, 7];

/// Exposure haircut applied to short profiles.
const SHORT_EXPOSURE_SCALE: f64 = 0.45;

/// The fixed profile catalogue. Each entry is a valid panel filter; its
/// display symbol follows from the filter (commodity future or the fixed
/// stock/ETP table).
fn filter_profiles() -> [PanelFilter; 14] {
    let stock = |direction| {
        PanelFilter::new(
            AssetClass::Stock,
            direction,
            Leverage::Unleveraged,
            Commodity::NonCommodity,
        )
    };
    let etp = |direction, leverage, commodity| {
        PanelFilter::new(AssetClass::Etp, direction, leverage, commodity)
    };
    let lev = |m| Leverage::Leveraged(m);
    [
        stock(Direction::Long),
        stock(Direction::Short),
        etp(Direction::Long, Leverage::Unleveraged, Commodity::NonCommodity),
        etp(Direction::Short, Leverage::Unleveraged, Commodity::NonCommodity),
        etp(Direction::Long, lev(LeverageMultiplier::X2), Commodity::NonCommodity),
        etp(Direction::Long, lev(LeverageMultiplier::X2), Commodity::Commodity(CommodityType::Gold)),
        etp(Direction::Short, lev(LeverageMultiplier::X3), Commodity::Commodity(CommodityType::Oil)),
        etp(Direction::Long, lev(LeverageMultiplier::X2), Commodity::Commodity(CommodityType::Silver)),
        etp(Direction::Long, lev(LeverageMultiplier::X2), Commodity::Commodity(CommodityType::Platinum)),
        etp(Direction::Long, lev(LeverageMultiplier::X2), Commodity::Commodity(CommodityType::Copper)),
        etp(Direction::Short, lev(LeverageMultiplier::X2), Commodity::Commodity(CommodityType::Gold)),
        etp(Direction::Short, lev(LeverageMultiplier::X2), Commodity::Commodity(CommodityType::Silver)),
        etp(Direction::Short, lev(LeverageMultiplier::X2), Commodity::Commodity(CommodityType::Platinum)),
        etp(Direction::Short, lev(LeverageMultiplier::X2), Commodity::Commodity(CommodityType::Copper)),
    ]
}

/// Display symbol of a profile.
fn profile_symbol(profile: &PanelFilter) -> &'static str {
    if let Some(c) = profile.commodity.commodity_type() {
        return commodity_quote(c).0;
    }
    match (profile.asset_class, profile.direction) {
        (AssetClass::Stock, Direction::Long) => "NVDA",
        (AssetClass::Stock, Direction::Short) => "TSLA",
        (AssetClass::Etp, Direction::Long) => "SPY",
        (AssetClass::Etp, Direction::Short) => "SDS",
    }
}

/// Entry-price anchor for a universe symbol.
fn universe_base_price(symbol: &str) -> f64 {
    match symbol {
        "NVDA" => 142.0,
        "TSLA" => 248.0,
        "GC=F" => 2650.0,
        "CL=F" => 72.0,
        _ => 585.0,
    }
}

/// Content-addressed trade id: profile key plus sequence number, hashed.
fn trade_id(profile_key: &str, seq: usize) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(profile_key.as_bytes());
    hasher.update(&(seq as u64).to_le_bytes());
    let hex = hasher.finalize().to_hex();
    format!("t-{}", &hex.as_str()[..12])
}

fn generate(now: DateTime<Utc>) -> Vec<ProfiledTrade> {
    let mut rng = rand::thread_rng();
    let mut trades = Vec::with_capacity(filter_profiles().len() * PROFILE_SIZES.len());

    for (idx, profile) in filter_profiles().into_iter().enumerate() {
        let symbol = profile_symbol(&profile);
        let instrument = instrument_for_symbol(symbol);
        let base = universe_base_price(symbol);
        let key = profile.canonical_key();
        let leverage_factor = profile.leverage.factor();
        let exposure_scale = match profile.direction {
            Direction::Short => SHORT_EXPOSURE_SCALE,
            Direction::Long => 1.0,
        };

        for (i, &size) in PROFILE_SIZES.iter().enumerate() {
            let entry_price = base * (0.97 + rng.gen::<f64>() * 0.06);
            let mark_price = entry_price * (0.98 + rng.gen::<f64>() * 0.05);
            let exposure_eur =
                (f64::from(size) * mark_price * leverage_factor * exposure_scale).round();
            let pnl_eur = ((mark_price - entry_price)
                * f64::from(size)
                * profile.direction.sign()
                * leverage_factor)
                .round();
            let hours_back = i as i64 * 3 + (rng.gen::<f64>() * 5.0).floor() as i64;
            let basket = if (idx + i) % 2 == 0 { Basket::EixB } else { Basket::EixM };

            trades.push(ProfiledTrade {
                profile,
                trade: OpenTrade {
                    id: trade_id(&key, i),
                    opened_at: now - Duration::hours(hours_back),
                    symbol: symbol.to_string(),
                    instrument: instrument.clone(),
                    side: profile.direction,
                    leverage_multiplier: profile.leverage.multiplier(),
                    size,
                    entry_price,
                    mark_price,
                    exposure_eur,
                    pnl_eur,
                    basket,
                    commodity_type: CommodityType::from_symbol(symbol),
                },
            });
        }
    }

    trades
}

/// The process-wide universe snapshot, generated on first access.
pub(crate) fn universe() -> &'static [ProfiledTrade] {
    static UNIVERSE: OnceLock<Vec<ProfiledTrade>> = OnceLock::new();
    UNIVERSE.get_or_init(|| generate(Utc::now()))
}

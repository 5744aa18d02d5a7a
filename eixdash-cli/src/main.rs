//! EIX dashboard CLI — inspect the mock data engine from the terminal.
//!
//! Commands:
//! - `snapshot` — header and panel view models as pretty JSON
//! - `trades` — open trades for a scope, sortable, with CSV/JSON export
//! - `timeline` — exposure series for basket/commodity/window selections
//! - `search` — instrument reference lookup
//! - `gauges` / `heatmap` — static catalogue dumps

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use eixdash_core::analytics::{
    exposure_timeline, instrument_exposure, open_trades, BasketFilter, CommodityFilter,
    ExposureTimeline, FilterScope, TimeWindow,
};
use eixdash_core::config::DashboardConfig;
use eixdash_core::domain::{OpenTrade, PanelFilters, PanelId, TradeSort};
use eixdash_core::heatmap::exposure_heatmap;
use eixdash_core::instruments::search_instruments;
use eixdash_core::panel::{header_data, panel_data};
use eixdash_core::sentiment::sentiment_gauges;

#[derive(Parser)]
#[command(name = "eixdash", about = "EIX risk dashboard — mock data engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard header and panel view models as JSON.
    Snapshot {
        /// TOML file with per-panel filters. Defaults to the built-in panels.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Restrict output to one panel (A, B, or C).
        #[arg(long)]
        panel: Option<PanelId>,
    },
    /// List open trades for a scope.
    Trades {
        /// PANEL_A, PANEL_B, PANEL_C, or ALL_PANELS_UNION.
        #[arg(long, default_value = "ALL_PANELS_UNION")]
        scope: FilterScope,

        /// NEWEST, LARGEST_EXPOSURE, or PNL. Omitted keeps generation order.
        #[arg(long)]
        sort: Option<TradeSort>,

        /// TOML file with per-panel filters. Defaults to the built-in panels.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Also write the listing to a CSV file.
        #[arg(long)]
        export_csv: Option<PathBuf>,

        /// Also write the listing to a JSON file.
        #[arg(long)]
        export_json: Option<PathBuf>,
    },
    /// Print an exposure timeline with its summary.
    Timeline {
        /// ALL, BER (Berlin desk), or MUN (Munich desk).
        #[arg(long, default_value = "ALL")]
        basket: BasketFilter,

        /// ALL or a commodity (GOLD, SILVER, PLATINUM, COPPER, OIL).
        #[arg(long, default_value = "ALL")]
        commodity: CommodityFilter,

        /// 1D, 1W, 1M, 3M, 1Y, or ALL.
        #[arg(long, default_value = "1D")]
        window: TimeWindow,

        /// Restrict to the first instrument matching this query.
        #[arg(long)]
        instrument: Option<String>,
    },
    /// Search the instrument reference catalogue.
    Search {
        query: String,
    },
    /// Print the sentiment gauges.
    Gauges,
    /// Print the exposure heatmap.
    Heatmap,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Snapshot { config, panel } => run_snapshot(config, panel),
        Commands::Trades { scope, sort, config, export_csv, export_json } => {
            run_trades(scope, sort, config, export_csv, export_json)
        }
        Commands::Timeline { basket, commodity, window, instrument } => {
            run_timeline(basket, commodity, window, instrument)
        }
        Commands::Search { query } => run_search(&query),
        Commands::Gauges => run_gauges(),
        Commands::Heatmap => run_heatmap(),
    }
}

fn load_filters(config: Option<PathBuf>) -> Result<PanelFilters> {
    match config {
        Some(path) => {
            let cfg = DashboardConfig::from_file(&path)
                .with_context(|| format!("load dashboard config {}", path.display()))?;
            Ok(cfg.panels)
        }
        None => Ok(PanelFilters::default()),
    }
}

fn run_snapshot(config: Option<PathBuf>, panel: Option<PanelId>) -> Result<()> {
    let filters = load_filters(config)?;
    let panel_ids: Vec<PanelId> = match panel {
        Some(id) => vec![id],
        None => vec![PanelId::A, PanelId::B, PanelId::C],
    };

    let panels: Vec<_> = panel_ids
        .into_iter()
        .map(|id| panel_data(id, filters.get(id)))
        .collect();
    let snapshot = serde_json::json!({
        "header": header_data(),
        "panels": panels,
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn run_trades(
    scope: FilterScope,
    sort: Option<TradeSort>,
    config: Option<PathBuf>,
    export_csv: Option<PathBuf>,
    export_json: Option<PathBuf>,
) -> Result<()> {
    let filters = load_filters(config)?;
    let trades = open_trades(scope, &filters, sort);

    if trades.is_empty() {
        println!("No open trades match the current panel filters.");
        return Ok(());
    }

    println!(
        "{:<16} {:<17} {:<6} {:<6} {:<4} {:>5} {:>10} {:>10} {:>12} {:>9}  {}",
        "Id", "Opened", "Symbol", "Side", "Lev", "Size", "Entry", "Mark", "Exposure", "PnL", "Basket"
    );
    println!("{}", "-".repeat(112));
    for t in &trades {
        let leverage = t
            .leverage_multiplier
            .map_or("-".to_string(), |m| m.to_string());
        println!(
            "{:<16} {:<17} {:<6} {:<6} {:<4} {:>5} {:>10.2} {:>10.2} {:>12.0} {:>9.0}  {}",
            t.id,
            t.opened_at.format("%Y-%m-%d %H:%M"),
            t.symbol,
            t.side.to_string(),
            leverage,
            t.size,
            t.entry_price,
            t.mark_price,
            t.exposure_eur,
            t.pnl_eur,
            t.basket,
        );
    }
    println!();
    println!("Trades: {}", trades.len());

    if let Some(path) = export_csv {
        write_trades_csv(&path, &trades)?;
        println!("CSV written to: {}", path.display());
    }
    if let Some(path) = export_json {
        let json = serde_json::to_string_pretty(&trades).context("serialize trades")?;
        std::fs::write(&path, json)
            .with_context(|| format!("write trades JSON {}", path.display()))?;
        println!("JSON written to: {}", path.display());
    }

    Ok(())
}

fn write_trades_csv(path: &Path, trades: &[OpenTrade]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create trades CSV {}", path.display()))?;

    writer.write_record([
        "id", "opened_at", "symbol", "side", "leverage", "size", "entry_price", "mark_price",
        "exposure_eur", "pnl_eur", "basket", "commodity",
    ])?;
    for t in trades {
        writer.write_record([
            t.id.clone(),
            t.opened_at.to_rfc3339(),
            t.symbol.clone(),
            t.side.to_string(),
            t.leverage_multiplier.map_or("-".into(), |m| m.to_string()),
            t.size.to_string(),
            format!("{:.4}", t.entry_price),
            format!("{:.4}", t.mark_price),
            format!("{:.0}", t.exposure_eur),
            format!("{:.0}", t.pnl_eur),
            t.basket.to_string(),
            t.commodity_type.map_or("-".into(), |c| c.to_string()),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn run_timeline(
    basket: BasketFilter,
    commodity: CommodityFilter,
    window: TimeWindow,
    instrument: Option<String>,
) -> Result<()> {
    let timeline = match instrument {
        Some(query) => {
            let hits = search_instruments(&query);
            let Some(instrument) = hits.first() else {
                bail!("no instrument matches {query:?}");
            };
            println!("Instrument: {}", instrument.name);
            instrument_exposure(instrument, basket, commodity, window)
        }
        None => exposure_timeline(basket, commodity, window),
    };
    print_timeline(&timeline);
    Ok(())
}

fn print_timeline(timeline: &ExposureTimeline) {
    let fmt = |v: Option<f64>| v.map_or("-".to_string(), |x| format!("{x:.0}"));

    println!(
        "{:<8} {:>12} {:>12} {:>12} {:>12} {:>7}",
        "Bucket", "Long", "Short", "Net", "Gross", "Trades"
    );
    println!("{}", "-".repeat(68));
    for point in &timeline.series {
        println!(
            "{:<8} {:>12} {:>12} {:>12} {:>12} {:>7}",
            point.t,
            fmt(point.long_eur),
            fmt(point.short_eur),
            fmt(point.net_eur),
            fmt(point.gross_eur),
            point.open_trades_count,
        );
    }

    let s = &timeline.summary;
    println!();
    println!("--- Summary ---");
    println!("Long:        {:>12.0} EUR", s.current_long_eur);
    println!("Short:       {:>12.0} EUR", s.current_short_eur);
    println!("Net:         {:>12.0} EUR", s.current_net_eur);
    println!("Gross:       {:>12.0} EUR", s.current_gross_eur);
    println!("Open trades: {:>12}", s.open_trades_count);
}

fn run_search(query: &str) -> Result<()> {
    let hits = search_instruments(query);
    if hits.is_empty() {
        println!("No instruments match {query:?}.");
        return Ok(());
    }

    println!(
        "{:<30} {:<14} {:<8} {:<7} {}",
        "Name", "ISIN", "WKN", "Ticker", "Exchange"
    );
    println!("{}", "-".repeat(70));
    for i in &hits {
        println!(
            "{:<30} {:<14} {:<8} {:<7} {}",
            i.name,
            i.isin.as_deref().unwrap_or("-"),
            i.wkn.as_deref().unwrap_or("-"),
            i.ticker.as_deref().unwrap_or("-"),
            i.exchange.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}

fn run_gauges() -> Result<()> {
    for g in sentiment_gauges() {
        println!(
            "{:<18} {:<7} long {:>3}% / short {:>3}%  long {:>8.0} EUR  short {:>8.0} EUR  total {:>8.0} EUR  {}",
            g.label,
            g.symbol,
            g.long_pct,
            g.short_pct,
            g.long_exposure_eur,
            g.short_exposure_eur,
            g.total_exposure_eur,
            g.net_direction,
        );
    }
    Ok(())
}

fn run_heatmap() -> Result<()> {
    let data = exposure_heatmap();
    println!(
        "{:<10} {:<10} {:<8} {:>10} {:>10} {:>10} {:>10}  {}",
        "Tile", "Kind", "Ticker", "Long", "Short", "Total", "Net", "Direction"
    );
    println!("{}", "-".repeat(92));
    for t in &data.tiles {
        println!(
            "{:<10} {:<10} {:<8} {:>10.0} {:>10.0} {:>10.0} {:>10.0}  {}",
            t.label,
            format!("{:?}", t.kind),
            t.ticker,
            t.long_exposure_eur,
            t.short_exposure_eur,
            t.total_exposure_eur,
            t.net_exposure_eur,
            t.net_direction,
        );
    }
    println!();
    println!("Scale anchor: {:.0} EUR", data.max_abs_total_exposure_eur);
    println!("Updated at:   {}", data.updated_at.format("%Y-%m-%d %H:%M:%S UTC"));
    Ok(())
}

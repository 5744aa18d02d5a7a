//! EIX dashboard engine — filter model, trade synthesis, panel resolution,
//! exposure analytics.
//!
//! This crate contains everything behind the risk dashboard's data surface:
//! - Filter model with consistency-preserving transitions
//! - Seeded per-filter trade synthesizer (reproducible by filter content)
//! - Panel data resolver (quotes, chart series, position split, trades)
//! - Exposure aggregation over a cached 98-trade universe
//! - Instrument search, sentiment gauges, exposure heatmap
//!
//! All operations are synchronous and complete in O(hundreds) of steps; the
//! only process-wide state is the trade universe, built once and read-only
//! thereafter.

pub mod analytics;
pub mod config;
pub mod domain;
pub mod heatmap;
pub mod instruments;
pub mod panel;
pub mod rng;
pub mod sentiment;
pub mod synth;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: all public types are Send + Sync, so view models
    /// and trade lists can cross a UI worker-thread boundary.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Domain types
        require_send::<domain::PanelFilter>();
        require_sync::<domain::PanelFilter>();
        require_send::<domain::PanelFilters>();
        require_sync::<domain::PanelFilters>();
        require_send::<domain::FilterChange>();
        require_sync::<domain::FilterChange>();
        require_send::<domain::PanelTrade>();
        require_sync::<domain::PanelTrade>();
        require_send::<domain::OpenTrade>();
        require_sync::<domain::OpenTrade>();
        require_send::<domain::InstrumentRef>();
        require_sync::<domain::InstrumentRef>();
        require_send::<domain::PanelViewModel>();
        require_sync::<domain::PanelViewModel>();
        require_send::<domain::HeaderData>();
        require_sync::<domain::HeaderData>();

        // Analytics types
        require_send::<analytics::ExposurePoint>();
        require_sync::<analytics::ExposurePoint>();
        require_send::<analytics::ExposureSummary>();
        require_sync::<analytics::ExposureSummary>();
        require_send::<analytics::ExposureTimeline>();
        require_sync::<analytics::ExposureTimeline>();
        require_send::<analytics::TimeWindow>();
        require_sync::<analytics::TimeWindow>();
        require_send::<analytics::FilterScope>();
        require_sync::<analytics::FilterScope>();

        // Catalogue types
        require_send::<sentiment::SentimentGauge>();
        require_sync::<sentiment::SentimentGauge>();
        require_send::<heatmap::HeatmapData>();
        require_sync::<heatmap::HeatmapData>();

        // Config
        require_send::<config::DashboardConfig>();
        require_sync::<config::DashboardConfig>();

        // RNG
        require_send::<rng::PanelRng>();
        require_sync::<rng::PanelRng>();
    }
}

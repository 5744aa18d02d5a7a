//! Time-bucketed exposure aggregation.
//!
//! A filtered trade set is spread over a fixed number of buckets per
//! window. Bucket values ramp from 70% to 100% of each trade's final
//! exposure across the window. For the intraday window, buckets past the
//! current hour are masked as future: their totals are absent while the
//! open-trade count is still reported.

use crate::domain::{Direction, InvalidFilterValue, OpenTrade};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregation window of the exposure chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "ALL")]
    All,
}

impl TimeWindow {
    pub const ALL_WINDOWS: [TimeWindow; 6] = [
        TimeWindow::OneDay,
        TimeWindow::OneWeek,
        TimeWindow::OneMonth,
        TimeWindow::ThreeMonths,
        TimeWindow::OneYear,
        TimeWindow::All,
    ];

    pub fn bucket_count(self) -> usize {
        match self {
            TimeWindow::OneDay => 16,
            TimeWindow::OneWeek => 7,
            TimeWindow::OneMonth => 30,
            TimeWindow::ThreeMonths => 12,
            TimeWindow::OneYear => 12,
            TimeWindow::All => 20,
        }
    }

    /// Label of a bucket, oldest first. The intraday window labels hours of
    /// day starting at 07:00; the others use relative indices.
    fn label(self, bucket_idx: usize) -> String {
        match self {
            TimeWindow::OneDay => format!("{:02}:00", 7 + bucket_idx),
            TimeWindow::OneWeek => format!("Day {}", bucket_idx + 1),
            TimeWindow::OneMonth => format!("D{}", bucket_idx + 1),
            TimeWindow::ThreeMonths => format!("W{}", bucket_idx + 1),
            TimeWindow::OneYear => format!("M{}", bucket_idx + 1),
            TimeWindow::All => format!("B{}", bucket_idx + 1),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeWindow::OneDay => "1D",
            TimeWindow::OneWeek => "1W",
            TimeWindow::OneMonth => "1M",
            TimeWindow::ThreeMonths => "3M",
            TimeWindow::OneYear => "1Y",
            TimeWindow::All => "ALL",
        })
    }
}

impl FromStr for TimeWindow {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1D" => Ok(TimeWindow::OneDay),
            "1W" => Ok(TimeWindow::OneWeek),
            "1M" => Ok(TimeWindow::OneMonth),
            "3M" => Ok(TimeWindow::ThreeMonths),
            "1Y" => Ok(TimeWindow::OneYear),
            "ALL" => Ok(TimeWindow::All),
            other => Err(InvalidFilterValue { field: "time window", value: other.to_string() }),
        }
    }
}

/// One bucket of the exposure series. Totals are absent on future buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposurePoint {
    pub t: String,
    pub long_eur: Option<f64>,
    pub short_eur: Option<f64>,
    pub net_eur: Option<f64>,
    pub gross_eur: Option<f64>,
    pub open_trades_count: usize,
}

/// Current totals of the trade set behind a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureSummary {
    pub current_long_eur: f64,
    pub current_short_eur: f64,
    pub current_net_eur: f64,
    pub current_gross_eur: f64,
    pub open_trades_count: usize,
}

/// Series plus summary, as consumed by the analytics chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureTimeline {
    pub series: Vec<ExposurePoint>,
    pub summary: ExposureSummary,
}

/// Fraction of final exposure attributed to a bucket at fractional position
/// `f` within the window.
fn ramp(fraction: f64) -> f64 {
    0.7 + fraction * 0.3
}

/// Build the bucketed series and summary for an already-filtered trade set.
/// `current_hour` drives future-masking of the intraday window; the summary
/// reflects the most recent non-future bucket.
pub fn build_timeline(
    trades: &[OpenTrade],
    window: TimeWindow,
    current_hour: u32,
) -> ExposureTimeline {
    let count = window.bucket_count();
    let mut series = Vec::with_capacity(count);
    let mut current_long = 0.0;
    let mut current_short = 0.0;

    for idx in 0..count {
        let is_future = window == TimeWindow::OneDay && (7 + idx) as u32 > current_hour;
        let (long_eur, short_eur) = if is_future {
            (None, None)
        } else {
            let factor = ramp((idx as f64 + 0.5) / count as f64);
            let total = |side: Direction| {
                trades
                    .iter()
                    .filter(|t| t.side == side)
                    .map(|t| (t.exposure_eur * factor).round())
                    .sum::<f64>()
            };
            let long = total(Direction::Long);
            let short = total(Direction::Short);
            current_long = long;
            current_short = short;
            (Some(long), Some(short))
        };

        series.push(ExposurePoint {
            t: window.label(idx),
            long_eur,
            short_eur,
            net_eur: long_eur.zip(short_eur).map(|(l, s)| l - s),
            gross_eur: long_eur.zip(short_eur).map(|(l, s)| l + s),
            open_trades_count: trades.len(),
        });
    }

    ExposureTimeline {
        series,
        summary: ExposureSummary {
            current_long_eur: current_long,
            current_short_eur: current_short,
            current_net_eur: current_long - current_short,
            current_gross_eur: current_long + current_short,
            open_trades_count: trades.len(),
        },
    }
}

//! Renderer-agnostic chart payloads.
//!
//! These mirror what the hosting UI draws (waterfall, ring chart, bar
//! chart) without naming any particular charting library: parallel label /
//! value series plus the annotation and color hints the reference tool
//! applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How one waterfall bar contributes to the running sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterfallMeasure {
    /// Adds to (or subtracts from) the running total.
    Relative,
    /// Resets to the running total; drawn as the closing bar.
    Total,
}

/// Capital waterfall: committed capital down to investable capital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallChart {
    pub labels: Vec<String>,
    pub measures: Vec<WaterfallMeasure>,
    /// Signed bar values in $M; fee and expense bars are negative.
    pub values: Vec<Decimal>,
    /// In-bar text, `$X.XXM`, always the unsigned amount.
    pub text: Vec<String>,
}

/// Ring chart of deal-count share by round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealSharePie {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
    /// Center hole fraction.
    pub hole: f64,
    /// One slice color per round, cycled when rounds outnumber the palette.
    pub colors: Vec<String>,
}

/// Text placed at the midpoint of one investment bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarAnnotation {
    pub label: String,
    /// Vertical anchor in dollars: half the bar height.
    pub y: Decimal,
    pub text: String,
}

/// Bar chart of capital allocated to initial investment per round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentBar {
    pub labels: Vec<String>,
    /// Bar heights in dollars.
    pub values: Vec<Decimal>,
    pub color: String,
    pub annotations: Vec<BarAnnotation>,
}

/// All three chart payloads for one recomputation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBundle {
    pub waterfall: WaterfallChart,
    pub deal_share: DealSharePie,
    pub investment: InvestmentBar,
}

//! Shared constants for the fund construction engine.

/// Label of the synthetic totals row appended to the allocation table.
pub const TOTALS_ROW_LABEL: &str = "Total";

/// Decimal precision for display percentages.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Bar color for the investment-per-round chart.
pub const INVESTMENT_BAR_COLOR: &str = "#4169e1";

/// Color cycle for the deal-share ring chart, one entry per round.
pub const DEAL_SHARE_COLORS: [&str; 3] = ["#FFA07A", "#FFD700", "#FF6347"];

/// Hole fraction of the deal-share ring chart.
pub const DEAL_SHARE_HOLE: f64 = 0.3;

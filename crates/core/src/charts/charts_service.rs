//! Chart payload construction from engine outputs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::charts_model::{
    BarAnnotation, ChartBundle, DealSharePie, InvestmentBar, WaterfallChart, WaterfallMeasure,
};
use crate::allocation::AllocationTable;
use crate::constants::{
    DEAL_SHARE_COLORS, DEAL_SHARE_HOLE, INVESTMENT_BAR_COLOR,
};
use crate::fund::WaterfallBreakdown;

/// Formats a $M amount as `$12.34M`.
fn fmt_millions(amount: Decimal) -> String {
    format!("${:.2}M", amount)
}

/// Builds the capital waterfall chart: committed capital, two negative
/// deduction bars, and investable capital as the closing total.
pub fn build_waterfall_chart(breakdown: &WaterfallBreakdown) -> WaterfallChart {
    WaterfallChart {
        labels: vec![
            "Committed".to_string(),
            "Management Fee".to_string(),
            "Fund Expenses".to_string(),
            "Investable Capital".to_string(),
        ],
        measures: vec![
            WaterfallMeasure::Relative,
            WaterfallMeasure::Relative,
            WaterfallMeasure::Relative,
            WaterfallMeasure::Total,
        ],
        values: vec![
            breakdown.committed_capital,
            -breakdown.management_fee_amount,
            -breakdown.fund_expense_amount,
            breakdown.investable_capital,
        ],
        text: vec![
            fmt_millions(breakdown.committed_capital),
            fmt_millions(breakdown.management_fee_amount),
            fmt_millions(breakdown.fund_expense_amount),
            fmt_millions(breakdown.investable_capital),
        ],
    }
}

/// Builds the deal-share ring chart from the per-round rows (the totals row
/// is excluded by construction).
pub fn build_deal_share_pie(table: &AllocationTable) -> DealSharePie {
    DealSharePie {
        labels: table.rows.iter().map(|r| r.round.clone()).collect(),
        values: table.rows.iter().map(|r| r.deals).collect(),
        hole: DEAL_SHARE_HOLE,
        colors: table
            .rows
            .iter()
            .enumerate()
            .map(|(i, _)| DEAL_SHARE_COLORS[i % DEAL_SHARE_COLORS.len()].to_string())
            .collect(),
    }
}

/// Builds the investment bar chart: one bar per round in dollars, with the
/// $M amount annotated at each bar's midpoint.
pub fn build_investment_bar(table: &AllocationTable) -> InvestmentBar {
    let values: Vec<Decimal> = table
        .rows
        .iter()
        .map(|r| r.total_investment * dec!(1_000_000))
        .collect();

    let annotations = table
        .rows
        .iter()
        .zip(&values)
        .map(|(row, value)| BarAnnotation {
            label: row.round.clone(),
            y: *value / dec!(2),
            text: fmt_millions(row.total_investment),
        })
        .collect();

    InvestmentBar {
        labels: table.rows.iter().map(|r| r.round.clone()).collect(),
        values,
        color: INVESTMENT_BAR_COLOR.to_string(),
        annotations,
    }
}

/// Builds all three chart payloads for one recomputation pass.
pub fn build_charts(breakdown: &WaterfallBreakdown, table: &AllocationTable) -> ChartBundle {
    ChartBundle {
        waterfall: build_waterfall_chart(breakdown),
        deal_share: build_deal_share_pie(table),
        investment: build_investment_bar(table),
    }
}

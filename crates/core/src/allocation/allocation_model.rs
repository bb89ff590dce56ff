//! Initial investment allocation table models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::TOTALS_ROW_LABEL;

/// One enriched row of the initial allocation table: the user's allocation
/// input joined with its round profile and the derived columns.
///
/// Optional fields are `None` when undefined rather than zeroed:
/// `initial_ownership_pct`, `ascended_deals` and `exited_deals` need a
/// matching round profile (the two grids are edited independently and can
/// transiently disagree), and `investable_capital_allocated_pct` needs a
/// non-zero investable capital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundAllocationRow {
    pub round: String,
    pub deals: u32,
    /// Average check size in dollars.
    pub avg_check: Decimal,
    /// avg check / post-money valuation, percent, 2 dp.
    pub initial_ownership_pct: Option<Decimal>,
    /// deals x avg check, in millions of dollars.
    pub total_investment: Decimal,
    /// Share of investable capital consumed by this round, percent, 2 dp.
    pub investable_capital_allocated_pct: Option<Decimal>,
    /// Deals expected to advance to the next round, whole deals.
    pub ascended_deals: Option<u32>,
    /// Deals expected to exit at this round, whole deals.
    pub exited_deals: Option<u32>,
}

/// Synthetic totals row appended to the allocation table.
///
/// Additive columns are summed from the finished rows. The average check is
/// recomputed from the sums (total investment / total deals), a weighted
/// rather than simple average, and is `None` when there are no deals.
/// Ownership is absent: it does not aggregate additively across rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationTotals {
    pub round: String,
    pub deals: u32,
    /// Weighted average check in whole dollars.
    pub avg_check: Option<Decimal>,
    /// Total initial investment in millions of dollars.
    pub total_investment: Decimal,
    /// Sum of per-round allocated percentages; may exceed 100 when the
    /// scenario over-commits.
    pub investable_capital_allocated_pct: Option<Decimal>,
    pub ascended_deals: u32,
    pub exited_deals: u32,
}

impl AllocationTotals {
    pub(crate) fn empty() -> Self {
        Self {
            round: TOTALS_ROW_LABEL.to_string(),
            deals: 0,
            avg_check: None,
            total_investment: Decimal::ZERO,
            investable_capital_allocated_pct: None,
            ascended_deals: 0,
            exited_deals: 0,
        }
    }
}

/// The full allocation table: one row per allocation input, in input order,
/// plus the totals row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationTable {
    pub rows: Vec<RoundAllocationRow>,
    pub totals: AllocationTotals,
}

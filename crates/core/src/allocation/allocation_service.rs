//! Initial investment allocation computation.

use std::collections::HashMap;

use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::allocation_model::{AllocationTable, AllocationTotals, RoundAllocationRow};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::rounds::{RoundAllocationInput, RoundProfile};

/// Rounds an expected deal count to whole deals, half-up. Fractional deals
/// are not meaningful, so 4.5 expected ascensions reads as 5.
fn round_deal_count(value: Decimal) -> u32 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

fn display_pct(value: Decimal) -> Decimal {
    value.round_dp(DISPLAY_DECIMAL_PRECISION)
}

/// Builds the enriched allocation table from allocation inputs joined with
/// round profiles by round name, plus the synthetic totals row.
///
/// Rows keep the order of `inputs`. An input with no matching profile still
/// produces a row: its deals and total investment compute normally while the
/// profile-derived columns stay `None`. Per-row derived columns are computed
/// first; totals are summed afterwards from the finished rows, and the
/// totals average check is re-derived from those sums rather than averaged
/// across rows.
pub fn compute_allocation_table(
    profiles: &[RoundProfile],
    inputs: &[RoundAllocationInput],
    investable_capital: Decimal,
) -> AllocationTable {
    debug!(
        "Computing allocation table: {} inputs, {} profiles, {}M investable",
        inputs.len(),
        profiles.len(),
        investable_capital
    );

    let profile_by_round: HashMap<&str, &RoundProfile> =
        profiles.iter().map(|p| (p.round.as_str(), p)).collect();

    let rows: Vec<RoundAllocationRow> = inputs
        .iter()
        .map(|input| {
            let profile = profile_by_round.get(input.round.as_str()).copied();
            let deals = Decimal::from(input.deals);

            let initial_ownership_pct = profile.and_then(|p| {
                if p.post_money_valuation.is_zero() {
                    None
                } else {
                    Some(display_pct(input.avg_check / p.post_money_valuation * dec!(100)))
                }
            });

            let total_investment = deals * input.avg_check / dec!(1_000_000);

            let investable_capital_allocated_pct = if investable_capital.is_zero() {
                None
            } else {
                Some(display_pct(total_investment / investable_capital * dec!(100)))
            };

            let ascended_deals =
                profile.map(|p| round_deal_count(deals * p.ascension_rate_pct / dec!(100)));
            let exited_deals =
                profile.map(|p| round_deal_count(deals * p.exit_rate_pct / dec!(100)));

            RoundAllocationRow {
                round: input.round.clone(),
                deals: input.deals,
                avg_check: input.avg_check,
                initial_ownership_pct,
                total_investment,
                investable_capital_allocated_pct,
                ascended_deals,
                exited_deals,
            }
        })
        .collect();

    let totals = compute_totals(&rows, investable_capital);

    AllocationTable { rows, totals }
}

fn compute_totals(rows: &[RoundAllocationRow], investable_capital: Decimal) -> AllocationTotals {
    let mut totals = AllocationTotals::empty();

    for row in rows {
        totals.deals += row.deals;
        totals.total_investment += row.total_investment;
        totals.ascended_deals += row.ascended_deals.unwrap_or(0);
        totals.exited_deals += row.exited_deals.unwrap_or(0);
    }

    // Weighted average: summed investment over summed deals, not a mean of
    // the per-row checks, since rounds write very different deal volumes.
    if totals.deals > 0 {
        let avg = totals.total_investment * dec!(1_000_000) / Decimal::from(totals.deals);
        totals.avg_check = Some(avg.round_dp(0));
    }

    if !investable_capital.is_zero() {
        totals.investable_capital_allocated_pct = Some(
            rows.iter()
                .filter_map(|r| r.investable_capital_allocated_pct)
                .sum(),
        );
    }

    totals
}

/// Share of investable capital left for follow-on rounds after initial
/// checks: 100 minus the totals-row allocated percentage. Negative when the
/// scenario over-commits (never clamped); `None` exactly when the allocated
/// percentage itself is undefined (zero investable capital).
pub fn remaining_capital_pct(totals: &AllocationTotals) -> Option<Decimal> {
    totals
        .investable_capital_allocated_pct
        .map(|allocated| dec!(100) - allocated)
}

//! Unit tests for editable-grid parsing.

use rust_decimal_macros::dec;

use super::rounds_grid::{parse_allocation_grid, parse_profile_grid, RawAllocationRow, RawProfileRow};
use crate::errors::ValidationError;

fn raw_allocation(round: &str, deals: &str, avg_check: &str) -> RawAllocationRow {
    RawAllocationRow {
        round: round.to_string(),
        deals: deals.to_string(),
        avg_check: avg_check.to_string(),
    }
}

#[test]
fn parses_clean_allocation_grid() {
    let outcome = parse_allocation_grid(&[
        raw_allocation("Pre-Seed", "30", "750000"),
        raw_allocation("Seed", "10", "1,500,000"),
    ]);

    assert!(outcome.is_clean());
    assert_eq!(outcome.rows.len(), 2);
    assert_eq!(outcome.rows[0].deals, 30);
    assert_eq!(outcome.rows[1].avg_check, dec!(1_500_000));
}

#[test]
fn strips_display_formatting() {
    let outcome = parse_allocation_grid(&[raw_allocation("Seed", " 10 ", "$1,500,000")]);

    assert!(outcome.is_clean());
    assert_eq!(outcome.rows[0].avg_check, dec!(1_500_000));
}

#[test]
fn bad_cell_fails_only_its_own_row() {
    let outcome = parse_allocation_grid(&[
        raw_allocation("Pre-Seed", "thirty", "750000"),
        raw_allocation("Seed", "10", "1500000"),
    ]);

    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(outcome.rows[0].round, "Seed");
    assert_eq!(outcome.errors.len(), 1);
    match &outcome.errors[0] {
        ValidationError::Cell { row, column, .. } => {
            assert_eq!(row, "Pre-Seed");
            assert_eq!(column, "deals");
        }
        other => panic!("expected cell error, got {other:?}"),
    }
}

#[test]
fn missing_cell_is_reported() {
    let outcome = parse_allocation_grid(&[raw_allocation("Seed", "10", "  ")]);

    assert!(outcome.rows.is_empty());
    assert!(matches!(
        outcome.errors[0],
        ValidationError::Cell { ref column, .. } if column == "avgCheck"
    ));
}

#[test]
fn negative_deal_count_is_rejected() {
    let outcome = parse_allocation_grid(&[raw_allocation("Seed", "-3", "1500000")]);

    assert!(outcome.rows.is_empty());
    assert_eq!(outcome.errors.len(), 1);
}

#[test]
fn profile_grid_round_trips() {
    let raw = RawProfileRow {
        round: "Pre-Seed".to_string(),
        pre_money_valuation: "10,500,000".to_string(),
        post_money_valuation: "12,000,000".to_string(),
        option_pool_pct: "10%".to_string(),
        ascension_rate_pct: "60".to_string(),
        exit_rate_pct: "1".to_string(),
        years_to_ascension: "1.5".to_string(),
        years_to_exit: "1.5".to_string(),
        exit_valuation: "15,000,000".to_string(),
    };

    let outcome = parse_profile_grid(&[raw]);

    assert!(outcome.is_clean());
    let profile = &outcome.rows[0];
    assert_eq!(profile.post_money_valuation, dec!(12_000_000));
    assert_eq!(profile.option_pool_pct, dec!(10));
    assert_eq!(profile.years_to_exit, dec!(1.5));
}

#[test]
fn blank_round_name_is_a_missing_field() {
    let outcome = parse_allocation_grid(&[raw_allocation("  ", "10", "1500000")]);

    assert!(matches!(outcome.errors[0], ValidationError::MissingField(_)));
}

//! Row-wise validation for the editable round grids.
//!
//! The hosting UI hands over raw text cells. Parsing is per-row: a bad cell
//! produces a [`ValidationError::Cell`] for that row and the remaining rows
//! are still converted, so one typo never blanks the whole table.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::rounds_model::{RoundAllocationInput, RoundProfile};
use crate::errors::ValidationError;

/// Raw text cells of one row of the round-profile grid.
#[derive(Debug, Clone, Default)]
pub struct RawProfileRow {
    pub round: String,
    pub pre_money_valuation: String,
    pub post_money_valuation: String,
    pub option_pool_pct: String,
    pub ascension_rate_pct: String,
    pub exit_rate_pct: String,
    pub years_to_ascension: String,
    pub years_to_exit: String,
    pub exit_valuation: String,
}

/// Raw text cells of one row of the allocation-input grid.
#[derive(Debug, Clone, Default)]
pub struct RawAllocationRow {
    pub round: String,
    pub deals: String,
    pub avg_check: String,
}

/// Result of parsing a grid: the rows that converted cleanly, plus one
/// [`ValidationError::Cell`] per row that did not.
#[derive(Debug)]
pub struct GridParseOutcome<T> {
    pub rows: Vec<T>,
    pub errors: Vec<ValidationError>,
}

impl<T> Default for GridParseOutcome<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T> GridParseOutcome<T> {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Strips display formatting ($, thousands separators, %) before parsing.
fn clean_cell(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%' | '_'))
        .collect()
}

fn parse_decimal_cell(
    row: &str,
    column: &str,
    value: &str,
) -> std::result::Result<Decimal, ValidationError> {
    let cleaned = clean_cell(value);
    if cleaned.is_empty() {
        return Err(ValidationError::Cell {
            row: row.to_string(),
            column: column.to_string(),
            message: "missing value".to_string(),
        });
    }
    Decimal::from_str(&cleaned).map_err(|err| ValidationError::Cell {
        row: row.to_string(),
        column: column.to_string(),
        message: err.to_string(),
    })
}

fn parse_count_cell(
    row: &str,
    column: &str,
    value: &str,
) -> std::result::Result<u32, ValidationError> {
    let cleaned = clean_cell(value);
    if cleaned.is_empty() {
        return Err(ValidationError::Cell {
            row: row.to_string(),
            column: column.to_string(),
            message: "missing value".to_string(),
        });
    }
    cleaned.parse::<u32>().map_err(|err| ValidationError::Cell {
        row: row.to_string(),
        column: column.to_string(),
        message: err.to_string(),
    })
}

fn parse_profile_row(raw: &RawProfileRow) -> std::result::Result<RoundProfile, ValidationError> {
    let round = raw.round.trim();
    if round.is_empty() {
        return Err(ValidationError::MissingField("round".to_string()));
    }
    Ok(RoundProfile {
        round: round.to_string(),
        pre_money_valuation: parse_decimal_cell(round, "preMoneyValuation", &raw.pre_money_valuation)?,
        post_money_valuation: parse_decimal_cell(
            round,
            "postMoneyValuation",
            &raw.post_money_valuation,
        )?,
        option_pool_pct: parse_decimal_cell(round, "optionPoolPct", &raw.option_pool_pct)?,
        ascension_rate_pct: parse_decimal_cell(round, "ascensionRatePct", &raw.ascension_rate_pct)?,
        exit_rate_pct: parse_decimal_cell(round, "exitRatePct", &raw.exit_rate_pct)?,
        years_to_ascension: parse_decimal_cell(round, "yearsToAscension", &raw.years_to_ascension)?,
        years_to_exit: parse_decimal_cell(round, "yearsToExit", &raw.years_to_exit)?,
        exit_valuation: parse_decimal_cell(round, "exitValuation", &raw.exit_valuation)?,
    })
}

fn parse_allocation_row(
    raw: &RawAllocationRow,
) -> std::result::Result<RoundAllocationInput, ValidationError> {
    let round = raw.round.trim();
    if round.is_empty() {
        return Err(ValidationError::MissingField("round".to_string()));
    }
    Ok(RoundAllocationInput {
        round: round.to_string(),
        deals: parse_count_cell(round, "deals", &raw.deals)?,
        avg_check: parse_decimal_cell(round, "avgCheck", &raw.avg_check)?,
    })
}

/// Parses the round-profile grid, collecting per-row errors.
pub fn parse_profile_grid(raw_rows: &[RawProfileRow]) -> GridParseOutcome<RoundProfile> {
    let mut outcome = GridParseOutcome::default();
    for raw in raw_rows {
        match parse_profile_row(raw) {
            Ok(row) => outcome.rows.push(row),
            Err(err) => outcome.errors.push(err),
        }
    }
    outcome
}

/// Parses the allocation-input grid, collecting per-row errors.
pub fn parse_allocation_grid(raw_rows: &[RawAllocationRow]) -> GridParseOutcome<RoundAllocationInput> {
    let mut outcome = GridParseOutcome::default();
    for raw in raw_rows {
        match parse_allocation_row(raw) {
            Ok(row) => outcome.rows.push(row),
            Err(err) => outcome.errors.push(err),
        }
    }
    outcome
}

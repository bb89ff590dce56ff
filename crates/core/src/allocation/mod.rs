//! Initial investment allocation: the joined per-round table and totals.

mod allocation_model;
mod allocation_service;

pub use allocation_model::{AllocationTable, AllocationTotals, RoundAllocationRow};
pub use allocation_service::{compute_allocation_table, remaining_capital_pct};

#[cfg(test)]
mod allocation_service_tests;

//! Round profiles, allocation inputs, and editable-grid validation.

mod rounds_grid;
mod rounds_model;

pub use rounds_grid::{
    parse_allocation_grid, parse_profile_grid, GridParseOutcome, RawAllocationRow, RawProfileRow,
};
pub use rounds_model::{
    default_round_allocations, default_round_profiles, RoundAllocationInput, RoundProfile,
};

#[cfg(test)]
mod rounds_grid_tests;

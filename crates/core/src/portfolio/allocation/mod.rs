//! Allocation - percentage-of-portfolio breakdown of cash and holdings.

mod allocation_builder;
mod allocation_model;

pub use allocation_builder::build_allocation;
pub use allocation_model::AllocationEntry;

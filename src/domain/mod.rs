//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, events, errors)
//! - `ahp` - Pure AHP priority synthesis (matrices, solver, consistency, ranking)

pub mod ahp;
pub mod foundation;

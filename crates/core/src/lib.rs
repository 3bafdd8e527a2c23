//! Rentworks domain core.
//!
//! Pure business logic for the car-rental platform: rental lifecycle state,
//! lateness derivation, tiered penalty computation, violation code
//! sequencing, staff authorization rules, and receipt rendering.
//!
//! This crate has zero internal deps and performs no I/O so it can be used
//! by the repository/API layers and unit-tested without a database.

pub mod authorization;
pub mod error;
pub mod penalty;
pub mod receipt;
pub mod rental;
pub mod types;
pub mod violation;

//! HTTP handlers, one module per resource.

pub mod branches;
pub mod cars;
pub mod org;
pub mod receipts;
pub mod rentals;
pub mod renters;
pub mod returns;
pub mod staff;
pub mod violations;

use rentworks_core::error::CoreError;

use crate::error::AppError;

/// Shorthand for the standard 404 error body.
pub(crate) fn not_found(entity: &'static str, id: impl std::fmt::Display) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity,
        id: id.to_string(),
    })
}

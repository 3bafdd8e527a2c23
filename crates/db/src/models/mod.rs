//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod branch;
pub mod car;
pub mod department;
pub mod rental;
pub mod renter;
pub mod staff;
pub mod violation;

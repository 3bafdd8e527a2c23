//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-statement workflows
//! (booking, cancellation, return completion) run in a transaction.

pub mod branch_repo;
pub mod car_repo;
pub mod department_repo;
pub mod rental_repo;
pub mod renter_repo;
pub mod staff_repo;
pub mod violation_repo;

pub use branch_repo::BranchRepo;
pub use car_repo::CarRepo;
pub use department_repo::{DepartmentRepo, JobRepo};
pub use rental_repo::RentalRepo;
pub use renter_repo::RenterRepo;
pub use staff_repo::StaffRepo;
pub use violation_repo::ViolationRepo;

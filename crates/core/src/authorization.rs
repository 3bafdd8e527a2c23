//! Staff authorization rules for return and violation processing.
//!
//! Only staff in the Operations department may process returns or record
//! violations, and only for rentals booked at their own branch. The check
//! is re-evaluated per call from a fresh staff/job/department lookup; the
//! repository layer supplies the resolved context.

use crate::error::CoreError;
use crate::types::DbId;

/// Department code authorized to process returns and violations.
pub const OPERATIONS_DEPARTMENT_CODE: &str = "OPS";

/// Staff identity resolved through the staff -> job -> department join.
#[derive(Debug, Clone)]
pub struct StaffAuthorization {
    pub staff_id: DbId,
    pub branch_id: DbId,
    pub department_code: String,
}

/// Check that `staff` may act on a rental booked at `rental_branch_id`.
///
/// Fails with `Forbidden` naming the reason: wrong department, or wrong
/// branch. Passing both conditions is required; there is no override.
pub fn ensure_can_process_rental(
    staff: &StaffAuthorization,
    rental_branch_id: DbId,
) -> Result<(), CoreError> {
    if staff.department_code != OPERATIONS_DEPARTMENT_CODE {
        return Err(CoreError::Forbidden(format!(
            "Staff {} is in department '{}', only {} staff may process returns and violations",
            staff.staff_id, staff.department_code, OPERATIONS_DEPARTMENT_CODE
        )));
    }
    if staff.branch_id != rental_branch_id {
        return Err(CoreError::Forbidden(format!(
            "Staff {} belongs to branch {}, rental is handled by branch {}",
            staff.staff_id, staff.branch_id, rental_branch_id
        )));
    }
    Ok(())
}

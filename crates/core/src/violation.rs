//! Violation categories, sequential code allocation, and reason text.
//!
//! Violation records are keyed by a prefixed, zero-padded sequential code
//! (`VLN001`, `VLN002`, ...). Allocation here is pure: the repository layer
//! supplies the current maximum code and persists the result. Read-max-then-
//! increment is not safe under concurrent writers by itself; the TEXT
//! primary key on the code column turns a lost race into a unique-violation
//! error instead of a duplicate row.

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Codes
// ---------------------------------------------------------------------------

/// Prefix for every violation code.
pub const CODE_PREFIX: &str = "VLN";

/// Minimum width of the numeric suffix. Codes beyond 999 simply grow wider.
pub const CODE_PAD_WIDTH: usize = 3;

/// Parse the numeric suffix of a violation code. Returns `None` for
/// strings that do not match the `VLN<digits>` shape.
pub fn code_number(code: &str) -> Option<i64> {
    let suffix = code.strip_prefix(CODE_PREFIX)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

/// Next code in the sequence given the current maximum (`None` when no
/// violations exist yet). A malformed maximum restarts the sequence.
pub fn next_code(current_max: Option<&str>) -> String {
    let next = current_max.and_then(code_number).unwrap_or(0) + 1;
    format!("{CODE_PREFIX}{next:0width$}", width = CODE_PAD_WIDTH)
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Category for violations created automatically on a late return. At most
/// one violation of this category exists per rental.
pub const CATEGORY_LATE_RETURN: &str = "Late Return";

pub const CATEGORY_CAR_DAMAGE: &str = "Car Damage";
pub const CATEGORY_TRAFFIC: &str = "Traffic Violation";
pub const CATEGORY_CLEANING: &str = "Cleaning Fee";

/// The standard category set. Categories are free-form; this list feeds
/// UI pickers and tests, it is not a closed enumeration.
pub const STANDARD_CATEGORIES: &[&str] = &[
    CATEGORY_LATE_RETURN,
    CATEGORY_CAR_DAMAGE,
    CATEGORY_TRAFFIC,
    CATEGORY_CLEANING,
];

/// Categories are free-form but must not be blank.
pub fn validate_category(category: &str) -> Result<(), String> {
    if category.trim().is_empty() {
        Err("Violation category must not be blank".to_string())
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Reason text
// ---------------------------------------------------------------------------

/// Human-readable reason recorded on an automatic late-return violation.
pub fn late_return_reason(hours: i64, expected_return_at: Timestamp) -> String {
    format!(
        "Returned {hours} hour(s) past the expected return time of {}",
        expected_return_at.format("%Y-%m-%d %H:%M")
    )
}

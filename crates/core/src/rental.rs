//! Rental lifecycle state and lateness derivation.
//!
//! A rental moves Upcoming -> Active -> Completed, or to Cancelled. Overdue
//! is never stored: it is derived from an Active rental whose expected
//! return time has passed. Late hours round *up* on any nonzero remainder,
//! so a return one millisecond past the deadline already counts as one
//! late hour.

use crate::types::Timestamp;

/// Milliseconds in one hour, the granularity of late-hour billing.
pub const MILLIS_PER_HOUR: i64 = 3_600_000;

// ---------------------------------------------------------------------------
// Status enums
// ---------------------------------------------------------------------------

/// Persisted rental status. Stored as lowercase TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Upcoming,
    Active,
    Completed,
    Cancelled,
}

impl RentalStatus {
    /// The stored TEXT representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Strict parse of the stored TEXT representation.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "upcoming" => Some(Self::Upcoming),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Tolerant parse: an unknown stored value defaults to `Upcoming`
    /// rather than failing, so one malformed row cannot break listings.
    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::Upcoming)
    }

    /// Whether the rental can still be picked up, returned, or cancelled.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Upcoming | Self::Active)
    }

    /// Whether the rental has reached a terminal state.
    pub fn is_terminal(self) -> bool {
        !self.is_open()
    }
}

/// Persisted car status. Stored as lowercase TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    Available,
    Rented,
    Maintenance,
}

impl CarStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Rented => "rented",
            Self::Maintenance => "maintenance",
        }
    }

    /// Strict parse of the stored TEXT representation.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "available" => Some(Self::Available),
            "rented" => Some(Self::Rented),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }

    /// Tolerant parse, defaulting to `Available` for unknown values.
    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::Available)
    }
}

// ---------------------------------------------------------------------------
// Lateness derivation
// ---------------------------------------------------------------------------

/// The timing fields of a rental that lateness is derived from.
///
/// `expected_return_at` is set at booking and never mutated by the penalty
/// engine; `actual_return_at`, once set, is final.
#[derive(Debug, Clone, Copy)]
pub struct RentalTiming {
    pub status: RentalStatus,
    pub expected_return_at: Option<Timestamp>,
    pub actual_return_at: Option<Timestamp>,
}

impl RentalTiming {
    /// True iff both return timestamps exist and the actual return is
    /// strictly after the expected one.
    pub fn is_late_return(&self) -> bool {
        match (self.expected_return_at, self.actual_return_at) {
            (Some(expected), Some(actual)) => actual > expected,
            _ => false,
        }
    }

    /// True when the rental was returned late, or is still open with its
    /// expected return time already behind `now`.
    pub fn is_late(&self, now: Timestamp) -> bool {
        if self.is_late_return() {
            return true;
        }
        match self.expected_return_at {
            Some(expected) if self.actual_return_at.is_none() && self.status.is_open() => {
                now > expected
            }
            _ => false,
        }
    }

    /// Billable late hours: from the actual return when one is recorded,
    /// otherwise projected from `now` for open rentals. Zero when on time.
    pub fn late_hours(&self, now: Timestamp) -> i64 {
        let Some(expected) = self.expected_return_at else {
            return 0;
        };
        match self.actual_return_at {
            Some(actual) => late_hours_between(expected, actual),
            None if self.status.is_open() => late_hours_between(expected, now),
            None => 0,
        }
    }

    /// The status shown to callers: `overdue` when an Active rental is
    /// past its expected return, otherwise the persisted status.
    pub fn effective_status(&self, now: Timestamp) -> &'static str {
        if self.status == RentalStatus::Active && self.is_late(now) {
            "overdue"
        } else {
            self.status.as_str()
        }
    }
}

/// Ceiling of the elapsed hours from `expected` to `actual`.
///
/// Computed over milliseconds so that any nonzero remainder rounds the
/// hour count up. Returns 0 when `actual` is at or before `expected`.
pub fn late_hours_between(expected: Timestamp, actual: Timestamp) -> i64 {
    let millis = (actual - expected).num_milliseconds();
    if millis <= 0 {
        0
    } else {
        (millis + MILLIS_PER_HOUR - 1) / MILLIS_PER_HOUR
    }
}

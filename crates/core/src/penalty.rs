//! Tiered late-return penalty computation.
//!
//! The first [`STANDARD_TIER_HOURS`] late hours are billed at the standard
//! per-hour rate; every hour beyond that at the elevated rate. Pure
//! functions of the hour count, no I/O.

use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// Rates
// ---------------------------------------------------------------------------

/// Per-hour rate for the first tier, in whole currency units.
pub const STANDARD_RATE_PER_HOUR: i64 = 50;

/// Per-hour rate beyond the standard tier, in whole currency units.
pub const ELEVATED_RATE_PER_HOUR: i64 = 100;

/// Number of late hours billed at the standard rate.
pub const STANDARD_TIER_HOURS: i64 = 6;

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Total penalty for `hours` late hours. Zero or negative hours cost nothing.
pub fn late_penalty(hours: i64) -> Decimal {
    Decimal::from(late_penalty_units(hours))
}

fn late_penalty_units(hours: i64) -> i64 {
    if hours <= 0 {
        0
    } else if hours <= STANDARD_TIER_HOURS {
        hours * STANDARD_RATE_PER_HOUR
    } else {
        STANDARD_TIER_HOURS * STANDARD_RATE_PER_HOUR
            + (hours - STANDARD_TIER_HOURS) * ELEVATED_RATE_PER_HOUR
    }
}

/// Per-tier split of a late penalty, used by receipt rendering to show the
/// computation explicitly.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PenaltyBreakdown {
    /// Hours billed at the standard rate (0..=6).
    pub standard_hours: i64,
    pub standard_amount: Decimal,
    /// Hours billed at the elevated rate (0 when not past the tier boundary).
    pub elevated_hours: i64,
    pub elevated_amount: Decimal,
    pub total: Decimal,
}

/// Split `hours` across the two tiers.
pub fn penalty_breakdown(hours: i64) -> PenaltyBreakdown {
    let hours = hours.max(0);
    let standard_hours = hours.min(STANDARD_TIER_HOURS);
    let elevated_hours = (hours - STANDARD_TIER_HOURS).max(0);

    PenaltyBreakdown {
        standard_hours,
        standard_amount: Decimal::from(standard_hours * STANDARD_RATE_PER_HOUR),
        elevated_hours,
        elevated_amount: Decimal::from(elevated_hours * ELEVATED_RATE_PER_HOUR),
        total: late_penalty(hours),
    }
}

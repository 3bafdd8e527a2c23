//! Plain-text receipt rendering.
//!
//! Receipts are rendered over plain value structs assembled by the
//! repository layer; this module never touches storage. Monetary values
//! print with two decimal places, absent timestamps as `N/A`.

use rust_decimal::Decimal;

use crate::penalty::{penalty_breakdown, ELEVATED_RATE_PER_HOUR, STANDARD_RATE_PER_HOUR};
use crate::types::{DbId, Timestamp};

const RULE: &str = "========================================";
const THIN_RULE: &str = "----------------------------------------";

// ---------------------------------------------------------------------------
// Input data
// ---------------------------------------------------------------------------

/// Everything a rental receipt needs, already joined and resolved.
#[derive(Debug, Clone)]
pub struct RentalReceipt {
    pub rental_id: DbId,
    pub renter_name: String,
    pub renter_phone: Option<String>,
    pub renter_email: Option<String>,
    /// Make and model, e.g. `Toyota Corolla`.
    pub car_label: String,
    pub car_plate: String,
    pub daily_rate: Decimal,
    pub created_at: Timestamp,
    pub actual_pickup_at: Option<Timestamp>,
    pub expected_return_at: Option<Timestamp>,
    pub actual_return_at: Option<Timestamp>,
    pub pickup_staff: Option<String>,
    pub return_staff: Option<String>,
    pub status_label: String,
    pub total_payment: Decimal,
    pub violations: Vec<ReceiptViolation>,
}

/// One itemized violation line on a rental receipt.
#[derive(Debug, Clone)]
pub struct ReceiptViolation {
    pub code: String,
    pub category: String,
    pub recorded_at: Timestamp,
    pub reason: String,
    /// Hours overdue; printed only when nonzero.
    pub duration_hours: i64,
    pub fee: Decimal,
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

fn fmt_time(ts: Timestamp) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

fn fmt_opt_time(ts: Option<Timestamp>) -> String {
    ts.map(fmt_time).unwrap_or_else(|| "N/A".to_string())
}

fn fmt_opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

fn fmt_money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

// ---------------------------------------------------------------------------
// Rental receipt
// ---------------------------------------------------------------------------

/// Render the full rental receipt: identity, car, lifecycle timestamps,
/// staff, base payment, itemized violations, and the grand total.
pub fn render_rental_receipt(receipt: &RentalReceipt) -> String {
    let mut out = String::new();

    out.push_str(RULE);
    out.push_str("\n           CAR RENTAL RECEIPT\n");
    out.push_str(RULE);
    out.push('\n');

    push_field(&mut out, "Rental ID", &receipt.rental_id.to_string());
    push_field(&mut out, "Customer", &receipt.renter_name);
    push_field(&mut out, "Phone", fmt_opt(&receipt.renter_phone));
    push_field(&mut out, "Email", fmt_opt(&receipt.renter_email));
    push_field(
        &mut out,
        "Car",
        &format!("{} ({})", receipt.car_label, receipt.car_plate),
    );
    push_field(&mut out, "Daily rate", &fmt_money(receipt.daily_rate));

    out.push_str(THIN_RULE);
    out.push('\n');

    push_field(&mut out, "Rental created", &fmt_time(receipt.created_at));
    push_field(&mut out, "Picked up", &fmt_opt_time(receipt.actual_pickup_at));
    push_field(
        &mut out,
        "Expected return",
        &fmt_opt_time(receipt.expected_return_at),
    );
    push_field(
        &mut out,
        "Actual return",
        &fmt_opt_time(receipt.actual_return_at),
    );
    push_field(&mut out, "Picked up by", fmt_opt(&receipt.pickup_staff));
    push_field(&mut out, "Returned to", fmt_opt(&receipt.return_staff));
    push_field(&mut out, "Status", &receipt.status_label);

    out.push_str(THIN_RULE);
    out.push('\n');

    push_field(
        &mut out,
        "Rental amount",
        &fmt_money(receipt.total_payment),
    );

    let mut violation_total = Decimal::from(0);
    if receipt.violations.is_empty() {
        out.push_str("Violations       : none\n");
    } else {
        out.push_str("Violations:\n");
        for v in &receipt.violations {
            violation_total += v.fee;
            out.push_str(&format!(
                "  [{}] {} at {}\n",
                v.code,
                v.category,
                fmt_time(v.recorded_at)
            ));
            out.push_str(&format!("      {}\n", v.reason));
            if v.duration_hours != 0 {
                out.push_str(&format!("      Duration: {} hour(s)\n", v.duration_hours));
            }
            out.push_str(&format!("      Fee: {}\n", fmt_money(v.fee)));
        }
    }
    push_field(&mut out, "Violation total", &fmt_money(violation_total));

    out.push_str(RULE);
    out.push('\n');
    push_field(
        &mut out,
        "TOTAL DUE",
        &fmt_money(receipt.total_payment + violation_total),
    );
    out.push_str(RULE);
    out.push('\n');

    out
}

fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{label:<17}: {value}\n"));
}

// ---------------------------------------------------------------------------
// Late-return receipt
// ---------------------------------------------------------------------------

/// Render the late-return penalty notice for a rental that is `hours` late.
///
/// When `hours` is zero the receipt short-circuits to an informational
/// message. When hours exceed the standard tier, the breakdown shows the
/// tier split explicitly.
pub fn render_late_return_receipt(
    rental_id: DbId,
    expected_return_at: Option<Timestamp>,
    hours: i64,
) -> String {
    if hours <= 0 {
        return format!("Rental {rental_id} is not late; no late-return penalty applies.\n");
    }

    let breakdown = penalty_breakdown(hours);
    let mut out = String::new();

    out.push_str(RULE);
    out.push_str("\n           LATE RETURN NOTICE\n");
    out.push_str(RULE);
    out.push('\n');

    push_field(&mut out, "Rental ID", &rental_id.to_string());
    push_field(
        &mut out,
        "Expected return",
        &fmt_opt_time(expected_return_at),
    );
    push_field(&mut out, "Hours overdue", &hours.to_string());

    out.push_str(THIN_RULE);
    out.push('\n');

    out.push_str(&format!(
        "First {} hour(s) @ {}.00/h : {}\n",
        breakdown.standard_hours,
        STANDARD_RATE_PER_HOUR,
        fmt_money(breakdown.standard_amount)
    ));
    if breakdown.elevated_hours > 0 {
        out.push_str(&format!(
            "Next {} hour(s) @ {}.00/h  : {}\n",
            breakdown.elevated_hours,
            ELEVATED_RATE_PER_HOUR,
            fmt_money(breakdown.elevated_amount)
        ));
    }

    out.push_str(THIN_RULE);
    out.push('\n');
    push_field(&mut out, "TOTAL PENALTY", &fmt_money(breakdown.total));
    out.push_str(RULE);
    out.push('\n');

    out
}

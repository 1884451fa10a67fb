//! Duration-based parking fee calculation.
//!
//! Billing policy: a stay is charged a minimum of one hour; beyond one hour
//! the duration is rounded up to whole hours. The computation is pure and
//! keeps full precision; rounding to 2 decimals happens only in response
//! DTOs, never here.

use chrono::{DateTime, Utc};

use crate::error::booking::BookingError;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Result of a cost computation.
///
/// `actual_duration_hours` is the elapsed fractional duration;
/// `charged_hours` the billed whole hours under the minimum-one-hour,
/// round-up policy; `total = charged_hours * hourly_rate`.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub actual_duration_hours: f64,
    pub charged_hours: i64,
    pub hourly_rate: f64,
    pub total: f64,
}

/// Computes the parking cost for a stay.
///
/// # Arguments
/// - `start`: When the vehicle parked
/// - `end`: When the vehicle left
/// - `hourly_rate`: The lot's hourly price
///
/// # Returns
/// - `Ok(CostBreakdown)`: The billed cost
/// - `Err(BookingError::InvalidInterval)`: `end` precedes `start`
pub fn compute_cost(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    hourly_rate: f64,
) -> Result<CostBreakdown, BookingError> {
    if end < start {
        return Err(BookingError::InvalidInterval);
    }

    let actual_duration_hours = (end - start).num_seconds() as f64 / SECONDS_PER_HOUR;

    let charged_hours = if actual_duration_hours <= 1.0 {
        1
    } else {
        actual_duration_hours.ceil() as i64
    };

    Ok(CostBreakdown {
        actual_duration_hours,
        charged_hours,
        hourly_rate,
        total: charged_hours as f64 * hourly_rate,
    })
}

//! Effective driver availability

use chrono::NaiveDate;
use kursy_types::DriverStatus;

use crate::model::Driver;

/// Leave dates are written as `YYYY-MM-DD`
pub const LEAVE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Availability of a driver on `today`.
///
/// A leave range containing `today` (both ends inclusive) yields `OnLeave`
/// whatever the stored status is. The stored status is never modified.
pub fn effective_status(driver: &Driver, today: NaiveDate) -> DriverStatus {
    match (driver.leave_start, driver.leave_end) {
        (Some(start), Some(end)) if start <= today && today <= end => DriverStatus::OnLeave,
        _ => driver.status,
    }
}

/// Parse a leave date, ignoring empty or malformed text
pub fn parse_leave_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, LEAVE_DATE_FORMAT).ok()
}

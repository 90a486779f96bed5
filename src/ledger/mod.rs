//! Pure derivations over ledger snapshots.
//!
//! Every view the server exposes (availability, overdue listing, report
//! rows, trend series, department rankings) is recomputed from a full
//! in-memory snapshot of the borrows and assets collections. Nothing in
//! this module touches the database or the clock; "today" is always an
//! explicit parameter.

pub mod availability;
pub mod overdue;
pub mod report;

pub use availability::{active_loan_asset_ids, can_borrow};
pub use overdue::{is_overdue, overdue_records, OVERDUE_AFTER_DAYS};
pub use report::{
    borrow_trend, department_drilldown, report_rows, top_departments, DepartmentCount,
    DepartmentLoan, ReportFilter, ReportRow, TrendFilter, TrendPoint, TrendSeries,
    TOP_DEPARTMENTS, UNSPECIFIED_DEPARTMENT,
};

use chrono::NaiveDate;

/// Date-order invariant: when both dates are present the return date must
/// not precede the loan date.
pub fn dates_ordered(start_date: NaiveDate, end_date: Option<NaiveDate>) -> bool {
    end_date.map_or(true, |end| end >= start_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn end_date_may_equal_start_date() {
        assert!(dates_ordered(d("2024-01-01"), Some(d("2024-01-01"))));
    }

    #[test]
    fn end_date_before_start_date_is_rejected() {
        assert!(!dates_ordered(d("2024-01-02"), Some(d("2024-01-01"))));
    }

    #[test]
    fn open_loan_has_no_order_to_violate() {
        assert!(dates_ordered(d("2024-01-02"), None));
    }
}

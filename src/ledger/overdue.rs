//! Overdue classifier for open loans.

use chrono::NaiveDate;

use crate::models::BorrowRecord;

/// An open loan becomes overdue once it has been out for strictly more
/// than this many days.
pub const OVERDUE_AFTER_DAYS: i64 = 14;

/// True iff the record is unreturned and older than the threshold as of
/// the given date. `as_of` is a parameter rather than a clock read so the
/// classifier stays deterministic.
pub fn is_overdue(record: &BorrowRecord, as_of: NaiveDate) -> bool {
    !record.returned && (as_of - record.start_date).num_days() > OVERDUE_AFTER_DAYS
}

/// Lazily yields the overdue records of a snapshot, in snapshot order.
pub fn overdue_records<'a>(
    records: &'a [BorrowRecord],
    as_of: NaiveDate,
) -> impl Iterator<Item = &'a BorrowRecord> {
    records.iter().filter(move |r| is_overdue(r, as_of))
}

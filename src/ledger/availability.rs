//! Availability guard: which assets currently have an open loan.

use std::collections::HashSet;

use uuid::Uuid;

use crate::models::BorrowRecord;

/// Asset ids with at least one unreturned borrow record.
pub fn active_loan_asset_ids(records: &[BorrowRecord]) -> HashSet<Uuid> {
    records
        .iter()
        .filter(|r| !r.returned)
        .map(|r| r.asset_id)
        .collect()
}

/// Advisory duplicate-borrow check against a snapshot of the ledger.
///
/// An unset asset id passes here; the required-field validation upstream
/// is responsible for rejecting it. The snapshot may be stale relative to
/// concurrent sessions, which is why the store additionally enforces the
/// one-open-loan rule with a partial unique index.
pub fn can_borrow(asset_id: Option<Uuid>, active: &HashSet<Uuid>) -> bool {
    match asset_id {
        Some(id) => !active.contains(&id),
        None => true,
    }
}

//! Reporting engine: filtered report rows, borrow trend, department
//! rankings. All functions are deterministic over their snapshot inputs.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::{Asset, BorrowRecord};

/// Number of departments kept in the outstanding-loans ranking.
pub const TOP_DEPARTMENTS: usize = 5;

/// Bucket for outstanding records with a blank borrower department.
pub const UNSPECIFIED_DEPARTMENT: &str = "unspecified";

/// Report filter. `None` means "All" / unbounded; the literal string
/// "All" from the original client is normalized away by the service.
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
pub struct ReportFilter {
    /// Inclusive lower bound on the loan date
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the loan date
    pub date_to: Option<NaiveDate>,
    /// Department name; matches borrower- or asset-side attribution
    pub department: Option<String>,
    /// Branch name; matches borrower- or asset-side attribution
    pub branch: Option<String>,
}

impl ReportFilter {
    /// Collapse "All" and empty strings into an absent filter.
    pub fn normalized(mut self) -> Self {
        self.department = normalize_choice(self.department);
        self.branch = normalize_choice(self.branch);
        self
    }
}

/// Trend filter: date range plus optional branch.
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
pub struct TrendFilter {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub branch: Option<String>,
}

impl TrendFilter {
    pub fn normalized(mut self) -> Self {
        self.branch = normalize_choice(self.branch);
        self
    }
}

fn normalize_choice(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != "All")
}

/// Flattened, display-ready report row. Asset-side fields of a borrow
/// whose asset no longer exists are empty strings, never null.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReportRow {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub asset_tag: String,
    pub asset_code: String,
    pub asset_name: String,
    pub brand: String,
    pub model: String,
    pub serial: String,
    pub borrower_name: String,
    pub borrower_dept: String,
    pub borrower_branch: String,
    pub asset_branch: String,
    /// Whether a signature was captured; the payload itself never leaves
    /// the borrows collection
    pub has_signature: bool,
    pub returned: bool,
    pub end_date: Option<NaiveDate>,
}

/// One day of borrow activity.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub count: i64,
}

/// Daily borrow counts over the filtered window, ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TrendSeries {
    pub points: Vec<TrendPoint>,
    pub total: i64,
    /// Mean count over days that had activity; 0 for an empty series
    pub average: f64,
}

/// Outstanding-loan count for one department.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DepartmentCount {
    pub department: String,
    pub count: i64,
}

/// Drill-down row: one outstanding loan of a ranked department.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DepartmentLoan {
    pub id: Uuid,
    pub borrower_name: String,
    pub asset_tag: String,
    pub asset_name: String,
    pub serial: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

fn index_assets(assets: &[Asset]) -> HashMap<Uuid, &Asset> {
    assets.iter().map(|a| (a.id, a)).collect()
}

fn field(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn in_date_range(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
}

/// A department or branch filter credits a record to the filter value if
/// either the borrower belongs to it or the equipment is homed there.
fn attribution_matches(
    wanted: Option<&str>,
    borrower_side: Option<&str>,
    asset_side: Option<&str>,
) -> bool {
    match wanted {
        None => true,
        Some(w) => borrower_side == Some(w) || asset_side == Some(w),
    }
}

fn passes(filter: &ReportFilter, record: &BorrowRecord, asset: Option<&Asset>) -> bool {
    if !in_date_range(record.start_date, filter.date_from, filter.date_to) {
        return false;
    }
    let dept_ok = attribution_matches(
        filter.department.as_deref(),
        Some(record.borrower_dept.as_str()),
        asset.and_then(|a| a.department.as_deref()),
    );
    let branch_ok = attribution_matches(
        filter.branch.as_deref(),
        record.borrower_branch.as_deref(),
        asset.and_then(|a| a.branch.as_deref()),
    );
    dept_ok && branch_ok
}

/// Join borrows against assets and apply the filter, preserving the
/// snapshot's record order.
pub fn report_rows(
    borrows: &[BorrowRecord],
    assets: &[Asset],
    filter: &ReportFilter,
) -> Vec<ReportRow> {
    let by_id = index_assets(assets);

    borrows
        .iter()
        .filter_map(|b| {
            let asset = by_id.get(&b.asset_id).copied();
            if !passes(filter, b, asset) {
                return None;
            }
            Some(ReportRow {
                id: b.id,
                start_date: b.start_date,
                asset_tag: asset.map_or(String::new(), |a| field(&a.tag)),
                asset_code: asset.map_or(String::new(), |a| field(&a.code)),
                asset_name: asset.map_or(String::new(), |a| a.name.clone()),
                brand: asset.map_or(String::new(), |a| field(&a.brand)),
                model: asset.map_or(String::new(), |a| field(&a.model)),
                serial: asset.map_or(String::new(), |a| field(&a.serial)),
                borrower_name: b.borrower_name.clone(),
                borrower_dept: b.borrower_dept.clone(),
                borrower_branch: field(&b.borrower_branch),
                asset_branch: asset.map_or(String::new(), |a| field(&a.branch)),
                has_signature: b.borrower_signature.as_deref().is_some_and(|s| !s.is_empty()),
                returned: b.returned,
                end_date: b.end_date,
            })
        })
        .collect()
}

/// Group filtered borrows by loan date. Dates are calendar days compared
/// directly, with no timezone conversion.
pub fn borrow_trend(
    borrows: &[BorrowRecord],
    assets: &[Asset],
    filter: &TrendFilter,
) -> TrendSeries {
    let by_id = index_assets(assets);
    let mut counts: BTreeMap<NaiveDate, i64> = BTreeMap::new();

    for b in borrows {
        if !in_date_range(b.start_date, filter.date_from, filter.date_to) {
            continue;
        }
        let asset = by_id.get(&b.asset_id).copied();
        if !attribution_matches(
            filter.branch.as_deref(),
            b.borrower_branch.as_deref(),
            asset.and_then(|a| a.branch.as_deref()),
        ) {
            continue;
        }
        *counts.entry(b.start_date).or_insert(0) += 1;
    }

    let points: Vec<TrendPoint> = counts
        .into_iter()
        .map(|(date, count)| TrendPoint { date, count })
        .collect();
    let total: i64 = points.iter().map(|p| p.count).sum();
    let average = if points.is_empty() {
        0.0
    } else {
        total as f64 / points.len() as f64
    };

    TrendSeries {
        points,
        total,
        average,
    }
}

fn effective_department(dept: &str) -> &str {
    if dept.trim().is_empty() {
        UNSPECIFIED_DEPARTMENT
    } else {
        dept
    }
}

/// Rank departments by outstanding loans, keeping the top five. Grouping
/// follows first-encountered order so ties resolve deterministically.
pub fn top_departments(borrows: &[BorrowRecord]) -> Vec<DepartmentCount> {
    let mut counts: IndexMap<&str, i64> = IndexMap::new();
    for b in borrows.iter().filter(|b| !b.returned) {
        *counts.entry(effective_department(&b.borrower_dept)).or_insert(0) += 1;
    }

    let mut ranked: Vec<DepartmentCount> = counts
        .into_iter()
        .map(|(department, count)| DepartmentCount {
            department: department.to_string(),
            count,
        })
        .collect();
    // stable sort: among equal counts, first-encountered stays first
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(TOP_DEPARTMENTS);
    ranked
}

/// Outstanding loans of one department, joined with asset identity.
pub fn department_drilldown(
    borrows: &[BorrowRecord],
    assets: &[Asset],
    department: &str,
) -> Vec<DepartmentLoan> {
    let by_id = index_assets(assets);

    borrows
        .iter()
        .filter(|b| !b.returned && effective_department(&b.borrower_dept) == department)
        .map(|b| {
            let asset = by_id.get(&b.asset_id).copied();
            DepartmentLoan {
                id: b.id,
                borrower_name: b.borrower_name.clone(),
                asset_tag: asset.map_or(String::new(), |a| field(&a.tag)),
                asset_name: asset.map_or(String::new(), |a| a.name.clone()),
                serial: asset.map_or(String::new(), |a| field(&a.serial)),
                start_date: b.start_date,
                end_date: b.end_date,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn asset(name: &str, department: &str, branch: &str) -> Asset {
        Asset {
            id: Uuid::new_v4(),
            tag: Some(format!("TAG-{name}")),
            code: None,
            name: name.to_string(),
            brand: Some("Mindray".into()),
            model: None,
            vendor: None,
            serial: Some(format!("SN-{name}")),
            department: Some(department.to_string()).filter(|s| !s.is_empty()),
            branch: Some(branch.to_string()).filter(|s| !s.is_empty()),
            location: None,
            purchase_date: None,
            price: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn borrow(asset_id: Uuid, dept: &str, branch: &str, start: &str, returned: bool) -> BorrowRecord {
        BorrowRecord {
            id: Uuid::new_v4(),
            asset_id,
            borrower_name: "Wipa".into(),
            borrower_dept: dept.to_string(),
            borrower_branch: Some(branch.to_string()).filter(|s| !s.is_empty()),
            lender_name: None,
            peripherals: None,
            start_date: d(start),
            end_date: None,
            returned,
            borrower_signature: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let a = asset("pump", "ICU", "Main");
        let borrows = vec![
            borrow(a.id, "ICU", "", "2024-01-09", false),
            borrow(a.id, "ICU", "", "2024-01-10", true),
            borrow(a.id, "ICU", "", "2024-01-20", true),
            borrow(a.id, "ICU", "", "2024-01-21", true),
        ];
        let filter = ReportFilter {
            date_from: Some(d("2024-01-10")),
            date_to: Some(d("2024-01-20")),
            ..Default::default()
        };
        let rows = report_rows(&borrows, std::slice::from_ref(&a), &filter);
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.start_date).collect();
        assert_eq!(dates, vec![d("2024-01-10"), d("2024-01-20")]);
    }

    #[test]
    fn same_filter_twice_yields_identical_rows() {
        let a = asset("monitor", "ER", "Main");
        let b = asset("ventilator", "ICU", "North");
        let borrows = vec![
            borrow(a.id, "ER", "Main", "2024-02-01", false),
            borrow(b.id, "ICU", "North", "2024-02-02", true),
            borrow(a.id, "Radiology", "", "2024-02-03", true),
        ];
        let assets = vec![a, b];
        let filter = ReportFilter::default();
        let first = report_rows(&borrows, &assets, &filter);
        let second = report_rows(&borrows, &assets, &filter);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn missing_asset_renders_empty_fields() {
        let orphan = borrow(Uuid::new_v4(), "ER", "", "2024-02-01", false);
        let rows = report_rows(std::slice::from_ref(&orphan), &[], &ReportFilter::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].asset_name, "");
        assert_eq!(rows[0].asset_tag, "");
        assert_eq!(rows[0].serial, "");
        assert_eq!(rows[0].borrower_name, "Wipa");
    }

    #[test]
    fn department_filter_credits_either_side() {
        let icu_asset = asset("pump", "ICU", "Main");
        let borrows = vec![
            // borrower from ER, equipment homed in ICU
            borrow(icu_asset.id, "ER", "", "2024-02-01", false),
            // borrower from ICU, equipment unknown
            borrow(Uuid::new_v4(), "ICU", "", "2024-02-02", false),
            // neither side matches
            borrow(Uuid::new_v4(), "Lab", "", "2024-02-03", false),
        ];
        let filter = ReportFilter {
            department: Some("ICU".into()),
            ..Default::default()
        };
        let rows = report_rows(&borrows, std::slice::from_ref(&icu_asset), &filter);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn branch_filter_credits_either_side() {
        let north_asset = asset("monitor", "ICU", "North");
        let borrows = vec![
            borrow(north_asset.id, "ER", "Main", "2024-02-01", false),
            borrow(Uuid::new_v4(), "ER", "North", "2024-02-02", false),
            borrow(Uuid::new_v4(), "ER", "Main", "2024-02-03", false),
        ];
        let filter = ReportFilter {
            branch: Some("North".into()),
            ..Default::default()
        };
        let rows = report_rows(&borrows, std::slice::from_ref(&north_asset), &filter);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn all_choice_normalizes_to_absent() {
        let filter = ReportFilter {
            department: Some("All".into()),
            branch: Some(String::new()),
            ..Default::default()
        }
        .normalized();
        assert!(filter.department.is_none());
        assert!(filter.branch.is_none());
    }

    #[test]
    fn trend_groups_by_day_in_ascending_order() {
        let a = asset("pump", "ICU", "Main");
        let borrows = vec![
            borrow(a.id, "ICU", "", "2024-03-02", true),
            borrow(a.id, "ICU", "", "2024-03-01", true),
            borrow(a.id, "ICU", "", "2024-03-02", true),
        ];
        let series = borrow_trend(&borrows, std::slice::from_ref(&a), &TrendFilter::default());
        assert_eq!(
            series.points,
            vec![
                TrendPoint { date: d("2024-03-01"), count: 1 },
                TrendPoint { date: d("2024-03-02"), count: 2 },
            ]
        );
        assert_eq!(series.total, 3);
        assert!((series.average - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_trend_has_zero_total_and_average() {
        let series = borrow_trend(&[], &[], &TrendFilter::default());
        assert!(series.points.is_empty());
        assert_eq!(series.total, 0);
        assert_eq!(series.average, 0.0);
    }

    #[test]
    fn top_five_is_stable_under_ties() {
        let mk = |dept: &str| borrow(Uuid::new_v4(), dept, "", "2024-04-01", false);
        // encounter order: A A A B B B C C D E F
        let borrows = vec![
            mk("A"), mk("A"), mk("A"),
            mk("B"), mk("B"), mk("B"),
            mk("C"), mk("C"),
            mk("D"), mk("E"), mk("F"),
        ];
        let ranked = top_departments(&borrows);
        assert_eq!(ranked.len(), TOP_DEPARTMENTS);
        assert_eq!(ranked[0].department, "A");
        assert_eq!(ranked[1].department, "B");
        assert_eq!(ranked[2].department, "C");
        // D and E tie with F at 1, but were encountered first
        assert_eq!(ranked[3].department, "D");
        assert_eq!(ranked[4].department, "E");
    }

    #[test]
    fn blank_departments_fall_into_the_unspecified_bucket() {
        let borrows = vec![
            borrow(Uuid::new_v4(), "", "", "2024-04-01", false),
            borrow(Uuid::new_v4(), "  ", "", "2024-04-02", false),
            borrow(Uuid::new_v4(), "ICU", "", "2024-04-03", false),
        ];
        let ranked = top_departments(&borrows);
        assert_eq!(ranked[0].department, UNSPECIFIED_DEPARTMENT);
        assert_eq!(ranked[0].count, 2);
    }

    #[test]
    fn returned_records_do_not_count_towards_the_ranking() {
        let borrows = vec![
            borrow(Uuid::new_v4(), "ICU", "", "2024-04-01", true),
            borrow(Uuid::new_v4(), "ER", "", "2024-04-02", false),
        ];
        let ranked = top_departments(&borrows);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].department, "ER");
    }

    #[test]
    fn report_rows_serialize_dates_as_iso_strings() {
        let a = asset("pump", "ICU", "Main");
        let mut b = borrow(a.id, "ICU", "", "2024-03-01", true);
        b.end_date = Some(d("2024-03-05"));
        let rows = report_rows(std::slice::from_ref(&b), std::slice::from_ref(&a), &ReportFilter::default());
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["start_date"], "2024-03-01");
        assert_eq!(json["end_date"], "2024-03-05");
        assert_eq!(json["returned"], true);
        // the export and the API share this shape; the signature payload
        // is not part of it
        assert!(json.get("borrower_signature").is_none());
    }

    #[test]
    fn drilldown_lists_only_that_departments_open_loans() {
        let a = asset("pump", "ICU", "Main");
        let borrows = vec![
            borrow(a.id, "ICU", "", "2024-04-01", false),
            borrow(a.id, "ICU", "", "2024-03-01", true),
            borrow(Uuid::new_v4(), "ER", "", "2024-04-02", false),
        ];
        let loans = department_drilldown(&borrows, std::slice::from_ref(&a), "ICU");
        assert_eq!(loans.len(), 1);
        assert_eq!(loans[0].asset_name, "pump");
        assert_eq!(loans[0].start_date, d("2024-04-01"));
    }
}

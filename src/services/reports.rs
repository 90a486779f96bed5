//! Reporting service: snapshot loading plus the pure ledger derivations.
//!
//! Each call re-fetches the full borrows and assets collections and
//! re-derives its view, mirroring the reload-then-recompute flow of the
//! original client.

use chrono::NaiveDate;

use crate::{
    config::FeatureConfig,
    error::{AppError, AppResult},
    ledger::{
        self, DepartmentCount, DepartmentLoan, ReportFilter, ReportRow, TrendFilter, TrendSeries,
    },
    models::{Asset, BorrowRecord},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
    features: FeatureConfig,
}

impl ReportsService {
    pub fn new(repository: Repository, features: FeatureConfig) -> Self {
        Self { repository, features }
    }

    /// With lenient reads (the default, matching the original client) a
    /// failed collection read degrades to an empty snapshot; a report over
    /// nothing beats a dead screen. Strict mode propagates the error.
    fn collection<T>(&self, result: AppResult<Vec<T>>, name: &str) -> AppResult<Vec<T>> {
        match result {
            Ok(rows) => Ok(rows),
            Err(e) if self.features.lenient_reads => {
                tracing::warn!("reading {} failed, serving empty snapshot: {}", name, e);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn snapshot(&self) -> AppResult<(Vec<BorrowRecord>, Vec<Asset>)> {
        let borrows = self.collection(self.repository.borrows.list().await, "borrows")?;
        let assets = self.collection(self.repository.assets.list().await, "assets")?;
        Ok((borrows, assets))
    }

    /// Filtered, flattened report rows
    pub async fn report(&self, filter: ReportFilter) -> AppResult<Vec<ReportRow>> {
        let filter = filter.normalized();
        let (borrows, assets) = self.snapshot().await?;
        Ok(ledger::report_rows(&borrows, &assets, &filter))
    }

    /// CSV rendition of the report, same columns and order as the table.
    /// The signature payload never reaches the export; only the derived
    /// presence flag does.
    pub async fn export_csv(&self, filter: ReportFilter) -> AppResult<Vec<u8>> {
        let rows = self.report(filter).await?;
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &rows {
            writer.serialize(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| AppError::Internal(format!("finalizing export: {}", e)))
    }

    /// Daily borrow counts for the trend chart
    pub async fn trend(&self, filter: TrendFilter) -> AppResult<TrendSeries> {
        let filter = filter.normalized();
        let (borrows, assets) = self.snapshot().await?;
        Ok(ledger::borrow_trend(&borrows, &assets, &filter))
    }

    /// Departments ranked by outstanding loans
    pub async fn top_departments(&self) -> AppResult<Vec<DepartmentCount>> {
        let (borrows, _) = self.snapshot().await?;
        Ok(ledger::top_departments(&borrows))
    }

    /// Outstanding loans of one ranked department
    pub async fn department_drilldown(&self, department: &str) -> AppResult<Vec<DepartmentLoan>> {
        let (borrows, assets) = self.snapshot().await?;
        Ok(ledger::department_drilldown(&borrows, &assets, department))
    }

    /// Dashboard counters and the overdue listing
    pub async fn dashboard(&self, as_of: NaiveDate) -> AppResult<Dashboard> {
        let (borrows, assets) = self.snapshot().await?;

        let open_loans = borrows.iter().filter(|b| b.is_open()).count() as i64;
        let overdue: Vec<BorrowRecord> =
            ledger::overdue_records(&borrows, as_of).cloned().collect();
        let overdue_rows = ledger::report_rows(&overdue, &assets, &ReportFilter::default());

        Ok(Dashboard {
            assets_total: assets.len() as i64,
            open_loans,
            overdue_loans: overdue_rows.len() as i64,
            overdue: overdue_rows,
        })
    }
}

/// Headline numbers plus the overdue table
#[derive(Debug, Clone, serde::Serialize, utoipa::ToSchema)]
pub struct Dashboard {
    pub assets_total: i64,
    pub open_loans: i64,
    pub overdue_loans: i64,
    pub overdue: Vec<ReportRow>,
}

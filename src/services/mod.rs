//! Business logic services

pub mod assets;
pub mod auth;
pub mod borrows;
pub mod catalogs;
pub mod reports;

use chrono::NaiveDate;

use crate::{
    config::{AuthConfig, FeatureConfig},
    repository::Repository,
};

/// The server's calendar date. Loan dates are plain calendar days, so
/// "today" follows the server's local clock.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub assets: assets::AssetsService,
    pub borrows: borrows::BorrowsService,
    pub catalogs: catalogs::CatalogsService,
    pub reports: reports::ReportsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig, features: FeatureConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            assets: assets::AssetsService::new(repository.clone()),
            borrows: borrows::BorrowsService::new(repository.clone(), features.clone()),
            catalogs: catalogs::CatalogsService::new(repository.clone()),
            reports: reports::ReportsService::new(repository, features),
        }
    }
}

//! Option catalog service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::catalog::{CatalogEntry, CatalogKind},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogsService {
    repository: Repository,
}

impl CatalogsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, kind: CatalogKind) -> AppResult<Vec<CatalogEntry>> {
        self.repository.catalogs.list(kind).await
    }

    pub async fn create(&self, kind: CatalogKind, name: &str) -> AppResult<CatalogEntry> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }
        match self.repository.catalogs.create(kind, name).await {
            Err(e) if e.is_unique_violation() => Err(AppError::Conflict(format!(
                "'{}' already exists in {}",
                name, kind
            ))),
            other => other,
        }
    }

    pub async fn delete(&self, kind: CatalogKind, id: Uuid) -> AppResult<()> {
        self.repository.catalogs.delete(kind, id).await
    }
}

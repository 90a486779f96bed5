//! Asset registry service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::asset::{Asset, CreateAsset, UpdateAsset},
    repository::Repository,
};

#[derive(Clone)]
pub struct AssetsService {
    repository: Repository,
}

impl AssetsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Asset>> {
        self.repository.assets.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Asset> {
        self.repository.assets.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateAsset) -> AppResult<Asset> {
        self.repository.assets.create(data).await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateAsset) -> AppResult<Asset> {
        self.repository.assets.update(id, data).await
    }

    /// Delete an asset. Open loans referencing it are left in the ledger
    /// and show up with empty asset fields in reports.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.assets.delete(id).await
    }
}

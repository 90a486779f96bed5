//! Option catalog model: editable named lists backing form choices

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A named catalog entry (brand, vendor, model, department, branch, location)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CatalogEntry {
    pub id: Uuid,
    pub name: String,
}

/// Create catalog entry request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCatalogEntry {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// The six catalog kinds, each persisted in its own table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Brands,
    Vendors,
    Models,
    Departments,
    Branches,
    Locations,
}

impl CatalogKind {
    /// Table name for this catalog. Kinds map onto a closed set of
    /// identifiers, so interpolating the result into SQL is safe.
    pub fn table(&self) -> &'static str {
        match self {
            CatalogKind::Brands => "brands",
            CatalogKind::Vendors => "vendors",
            CatalogKind::Models => "models",
            CatalogKind::Departments => "departments",
            CatalogKind::Branches => "branches",
            CatalogKind::Locations => "locations",
        }
    }

    pub fn all() -> [CatalogKind; 6] {
        [
            CatalogKind::Brands,
            CatalogKind::Vendors,
            CatalogKind::Models,
            CatalogKind::Departments,
            CatalogKind::Branches,
            CatalogKind::Locations,
        ]
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table())
    }
}

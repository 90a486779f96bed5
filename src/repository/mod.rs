//! Repository layer for database operations

pub mod assets;
pub mod borrows;
pub mod catalogs;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub assets: assets::AssetsRepository,
    pub borrows: borrows::BorrowsRepository,
    pub catalogs: catalogs::CatalogsRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            assets: assets::AssetsRepository::new(pool.clone()),
            borrows: borrows::BorrowsRepository::new(pool.clone()),
            catalogs: catalogs::CatalogsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}

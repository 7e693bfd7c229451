//! PostgreSQL bootstrap
//!
//! One shared pool, handed out to the Postgres repositories.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tg_core::config::DatabaseConfig;

use crate::project_roles::PgProjectRoleRepository;
use crate::repository::RepositoryResult;
use crate::story_assignments::PgStoryAssignmentRepository;

/// Shared connection pool for the Postgres repositories
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    fn options(config: &DatabaseConfig) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.pool_size)
            .acquire_timeout(Duration::from_secs(config.pool_timeout_seconds))
    }

    /// Open the pool and wait for the first connection
    pub async fn connect(config: &DatabaseConfig) -> RepositoryResult<Self> {
        let pool = Self::options(config).connect(&config.url).await?;
        tracing::info!(max_connections = config.pool_size, "Database pool created");
        Ok(Self { pool })
    }

    /// Build the pool without connecting; connections open on first use
    pub fn connect_lazy(config: &DatabaseConfig) -> RepositoryResult<Self> {
        let pool = Self::options(config).connect_lazy(&config.url)?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn role_repository(&self) -> PgProjectRoleRepository {
        PgProjectRoleRepository::new(self.pool.clone())
    }

    pub fn assignment_repository(&self) -> PgStoryAssignmentRepository {
        PgStoryAssignmentRepository::new(self.pool.clone())
    }

    /// Round-trip a trivial query
    pub async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

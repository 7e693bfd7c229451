//! Project role repository
//!
//! Database operations for the `project_roles` table.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tg_core::traits::{Entity, Id};
use tg_models::ProjectRole;

use crate::filters::ProjectRoleFilters;
use crate::repository::{ProjectRoleRepository, RepositoryError, RepositoryResult};

const COLUMNS: &str = r#"id, project_id, name, slug, "order", is_admin, permissions"#;

/// Project role database row
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRoleRow {
    pub id: Id,
    pub project_id: Id,
    pub name: String,
    pub slug: String,
    pub order: i64,
    pub is_admin: bool,
    pub permissions: Vec<String>,
}

impl From<ProjectRoleRow> for ProjectRole {
    fn from(row: ProjectRoleRow) -> Self {
        Self {
            id: row.id,
            project_id: row.project_id,
            name: row.name,
            slug: row.slug,
            order: row.order,
            is_admin: row.is_admin,
            permissions: row.permissions,
        }
    }
}

/// PostgreSQL-backed [`ProjectRoleRepository`]
#[derive(Clone)]
pub struct PgProjectRoleRepository {
    pool: PgPool,
}

impl PgProjectRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select(filters: &ProjectRoleFilters) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {} FROM {}",
            COLUMNS,
            ProjectRole::TABLE_NAME
        ));
        filters.push_where(&mut builder);
        builder.push(r#" ORDER BY "order" ASC, name ASC"#);
        builder
    }
}

#[async_trait]
impl ProjectRoleRepository for PgProjectRoleRepository {
    async fn get_project_roles(
        &self,
        filters: ProjectRoleFilters,
    ) -> RepositoryResult<Vec<ProjectRole>> {
        let mut builder = Self::select(&filters);
        let rows = builder
            .build_query_as::<ProjectRoleRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ProjectRole::from).collect())
    }

    async fn get_project_role(
        &self,
        filters: ProjectRoleFilters,
    ) -> RepositoryResult<Option<ProjectRole>> {
        let mut builder = Self::select(&filters);
        builder.push(" LIMIT 1");

        let row = builder
            .build_query_as::<ProjectRoleRow>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ProjectRole::from))
    }

    async fn update_project_role_permissions(
        &self,
        role: &ProjectRole,
    ) -> RepositoryResult<ProjectRole> {
        let sql = format!(
            "UPDATE {} SET permissions = $1 WHERE id = $2 RETURNING {}",
            ProjectRole::TABLE_NAME,
            COLUMNS
        );

        let row = sqlx::query_as::<_, ProjectRoleRow>(&sql)
            .bind(&role.permissions)
            .bind(role.id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!(
                    "{} with id {} not found",
                    ProjectRole::TYPE_NAME,
                    role.id
                ))
            })?;

        Ok(row.into())
    }
}

//! Story assignment repository
//!
//! Database operations for the `story_assignments` table.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tg_core::traits::Entity;
use tg_models::StoryAssignment;

use crate::filters::StoryAssignmentFilters;
use crate::repository::{reject_unfiltered_delete, RepositoryResult, StoryAssignmentRepository};

/// PostgreSQL-backed [`StoryAssignmentRepository`]
#[derive(Clone)]
pub struct PgStoryAssignmentRepository {
    pool: PgPool,
}

impl PgStoryAssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn delete(filters: &StoryAssignmentFilters) -> QueryBuilder<'static, Postgres> {
        let mut builder =
            QueryBuilder::new(format!("DELETE FROM {} sa", StoryAssignment::TABLE_NAME));
        filters.push_where(&mut builder);
        builder
    }
}

#[async_trait]
impl StoryAssignmentRepository for PgStoryAssignmentRepository {
    async fn delete_stories_assignments(
        &self,
        filters: StoryAssignmentFilters,
    ) -> RepositoryResult<u64> {
        reject_unfiltered_delete(&filters)?;

        let mut builder = Self::delete(&filters);
        let result = builder.build().execute(&self.pool).await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_delete_by_story_sql() {
        let filters = StoryAssignmentFilters::new().with_story_id(Uuid::new_v4());
        let builder = PgStoryAssignmentRepository::delete(&filters);

        assert_eq!(
            builder.sql(),
            "DELETE FROM story_assignments sa WHERE sa.story_id = $1"
        );
    }

    #[test]
    fn test_delete_by_project_sql() {
        let filters = StoryAssignmentFilters::new().with_project_id(Uuid::new_v4());
        let builder = PgStoryAssignmentRepository::delete(&filters);

        assert_eq!(
            builder.sql(),
            "DELETE FROM story_assignments sa \
             WHERE sa.story_id IN (SELECT s.id FROM stories s WHERE s.project_id = $1)"
        );
    }
}

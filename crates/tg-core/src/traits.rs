//! Core traits shared by the domain models

use uuid::Uuid;

/// Primary key type
pub type Id = Uuid;

/// Trait for entities that have a primary key
pub trait Identifiable {
    fn id(&self) -> Id;
}

/// Trait for entities that belong to a project
pub trait ProjectScoped {
    fn project_id(&self) -> Id;

    fn belongs_to(&self, project_id: Id) -> bool {
        self.project_id() == project_id
    }
}

/// Base trait for all persisted domain entities
pub trait Entity: Identifiable + Send + Sync {
    /// The database table name
    const TABLE_NAME: &'static str;

    /// Human-readable type name for error messages
    const TYPE_NAME: &'static str;
}

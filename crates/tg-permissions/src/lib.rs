//! # tg-permissions
//!
//! Permission comparison and validation for project roles.
//!
//! - [`PermissionsComparator`]: detects permission removals that need follow-up work
//! - [`PermissionsContract`]: validates a permission set before it is stored

pub mod compare;
pub mod contract;

pub use compare::{
    is_view_story_permission_deleted, PermissionsComparator, StoryPermissionsComparator,
};
pub use contract::{permissions_are_compatible, permissions_are_valid, PermissionsContract};

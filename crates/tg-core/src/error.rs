//! Core error types for Taiga RS
//!
//! Every crate keeps its own error enum; they all convert into [`TgError`],
//! which carries the HTTP status mapping used by the host application.

use std::collections::HashMap;
use thiserror::Error;

/// Core error type for all Taiga operations
#[derive(Error, Debug)]
pub enum TgError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Event publishing error: {0}")]
    Events(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias used at the application boundary
pub type TgResult<T> = Result<T, TgError>;

/// Validation errors collection
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("Validation errors: {errors:?}")]
pub struct ValidationErrors {
    /// Field-specific errors: field_name -> Vec<error_messages>
    pub errors: HashMap<String, Vec<String>>,
    /// Base errors not tied to a specific field
    pub base_errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_base(&mut self, message: impl Into<String>) {
        self.base_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.base_errors.is_empty()
    }

    /// Get errors for a specific field
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}

/// HTTP status code mapping for errors
impl TgError {
    pub fn status_code(&self) -> u16 {
        match self {
            TgError::NotFound(_) => 404,
            TgError::BadRequest { .. } => 400,
            TgError::Validation(_) => 422,
            TgError::Conflict { .. } => 409,
            TgError::Database(_) | TgError::Events(_) | TgError::Internal(_) => 500,
            TgError::Config(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            TgError::NotFound(_) => "not_found",
            TgError::BadRequest { .. } => "bad_request",
            TgError::Validation(_) => "validation_failed",
            TgError::Conflict { .. } => "conflict",
            TgError::Database(_) => "database_error",
            TgError::Events(_) => "events_error",
            TgError::Internal(_) => "internal_error",
            TgError::Config(_) => "configuration_error",
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        TgError::BadRequest {
            message: message.into(),
        }
    }
}

//! # tg-core
//!
//! Core types, traits, and utilities for Taiga RS.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types
//! - Core traits (Entity, Identifiable, ProjectScoped)
//! - Configuration types
//! - Tracing subscriber setup

pub mod error;
pub mod traits;
pub mod config;
pub mod telemetry;

pub use error::*;
pub use traits::*;

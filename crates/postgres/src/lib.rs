//! # Postgres
//!
//! This crate provides the persistence layer for the dock rental application:
//! connection pooling, schema creation, and seed data.

/// Database client for the dock rental application.
pub mod database;
/// Schema creation and initial seed data.
pub mod schema;

//! # Account Services
//!
//! This crate provides user account services for the dock rental application:
//! registration with email uniqueness, credential verification, and the
//! account error taxonomy.

/// Service definitions for user registration and credential verification.
pub mod service;
/// Types and structures used in account services.
pub mod types;

//! # Web Handlers for the Dock Rental Application
//!
//! This crate provides the HTTP handlers for the dock rental API.

/// Account handlers (register, login)
mod account_handlers;
pub use account_handlers::*;

/// Health, debug, image-stub, and fallback handlers
mod admin_handlers;
pub use admin_handlers::*;

/// Handlers for booking creation
mod booking_handlers;
pub use booking_handlers::*;

/// Booking persistence and projection service
mod booking_service;
pub use booking_service::*;

/// Types for booking requests, projections, and errors
mod booking_types;
pub use booking_types::*;

/// Read-only catalog handlers (slips, users, bookings)
mod catalog_handlers;
pub use catalog_handlers::*;

/// Catalog query service
mod catalog_service;
pub use catalog_service::*;

/// Types for catalog projections and errors
mod catalog_types;
pub use catalog_types::*;

/// Payment-intent handlers
mod payment_handlers;
pub use payment_handlers::*;

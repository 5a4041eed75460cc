//! # Payments
//!
//! This crate provides a client for the Stripe payment-intent API, used to
//! start and confirm charges for dock slip bookings.

/// Stripe payment-intent REST client.
pub mod client;
/// Types and structures used in payment operations.
pub mod types;

pub use client::StripeClient;

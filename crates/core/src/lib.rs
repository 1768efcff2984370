//! PromoCode Factory Core - Domain entities, services, and traits.
//!
//! This crate contains the partner promo-code limit rules.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod errors;
pub mod partners;
pub mod repository;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

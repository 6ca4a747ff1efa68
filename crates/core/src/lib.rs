//! Vendor Cart Core - Shared types library.
//!
//! This crate provides the domain types used across all Vendor Cart components:
//! - `server` - The `/cart` HTTP service
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. The optional `postgres` feature adds `sqlx` bindings
//! for the identifier types.
//!
//! # Modules
//!
//! - [`types`] - User identifiers, vendor IDs, cart items and vendor groups

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

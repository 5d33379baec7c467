//! # vola-core
//!
//! Core types shared across the Vola admin console crates:
//! - Roles and the dashboard allow-list
//! - Cookie attribute policy for the persisted session
//! - Resource structs for plans, stats, and account payloads
//! - Lightweight session identity for cross-crate passing
//! - Cross-cutting error types

pub mod cookie;
pub mod entities;
pub mod errors;
pub mod identity;
pub mod role;

pub use cookie::SameSite;
pub use errors::CoreError;
pub use identity::SessionIdentity;
pub use role::Role;

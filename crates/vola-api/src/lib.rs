//! # vola-api
//!
//! HTTP access to the Vola platform API.
//!
//! [`ApiClient::fetch_resource`] and [`ApiClient::submit`] turn every
//! response into either the unwrapped payload or one [`ApiError`] carrying a
//! single normalized message. Typed endpoint wrappers live in [`endpoints`].

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;

pub use client::ApiClient;
pub use envelope::{ErrorBody, ErrorsField, FieldError, normalize_failure};
pub use error::ApiError;

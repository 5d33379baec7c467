//! Typed wrappers over [`ApiClient`](crate::ApiClient) for each platform resource.

pub mod auth;
pub mod plans;
pub mod stats;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const PLANS_PATH: &str = "/plan";

pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod plans;
pub mod schema;
pub mod shared;
pub mod stats;

pub mod auth;
pub mod plans;

pub use auth::AuthCommands;
pub use plans::PlanCommands;

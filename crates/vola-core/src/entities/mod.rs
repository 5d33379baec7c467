//! Resource and request payloads exchanged with the platform API.

pub mod account;
pub mod plan;
pub mod stats;

pub use account::{AccountProfile, AssociationData, Gender, LoginRequest, RegisterRequest, SignupReceipt};
pub use plan::{Plan, PlanAction};
pub use stats::{
    Activity, ActivityKind, ApplicationBreakdown, AssociationOwnerStats, AssociationRating,
    CategoryCount, GeneralStats, RatingGauge, TopPlan, UserDistribution, UserGrowth,
};

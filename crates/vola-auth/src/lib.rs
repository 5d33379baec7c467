//! # vola-auth
//!
//! Client-side session handling for the Vola admin console.
//!
//! Provides the persisted session cookie ([`token_store`]), unverified decoding
//! of the credential payload ([`claims`]), and the route-level session gate
//! ([`gate`]) every protected view passes through.
//!
//! The decoded role only chooses which screen to show. The backend verifies
//! the bearer credential and enforces authorization on every request.

pub mod claims;
pub mod error;
pub mod gate;
pub mod jar;
pub mod token_store;

pub use claims::Claims;
pub use error::AuthError;
pub use gate::{Admission, AuthContext, GateState, Navigator, Redirect, Render, SessionGate};
pub use token_store::{CookiePolicy, SessionCookie, TokenStore};

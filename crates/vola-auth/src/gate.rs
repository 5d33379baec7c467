//! Route-level session gate.
//!
//! [`GateState`] holds the pure state machine. [`SessionGate`] drives it
//! against a [`TokenStore`] and performs the redirect effects through a
//! [`Navigator`]. Each activation reads the store again and decodes the
//! credential again. Nothing is cached between activations.

use std::fmt;
use std::sync::Mutex;

use vola_core::{Role, SessionIdentity};

use crate::claims::{self, Claims};
use crate::error::AuthError;
use crate::token_store::TokenStore;

/// Shown instead of protected content to roles outside the dashboard membership.
pub const RESTRICTED_TITLE: &str = "You are not an admin.";
pub const RESTRICTED_NOTICE: &str =
    "Access to the dashboard is restricted. We will add more features for non-admins soon.";

/// Where the gate sends the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Dashboard,
}

impl Redirect {
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/",
        }
    }
}

/// What a protected view shows for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    Nothing,
    Protected,
    Restricted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Unknown,
    Unauthenticated,
    Authenticated(Option<Role>),
}

impl GateState {
    /// Activation transition. An absent session yields a login redirect.
    #[must_use]
    pub fn activate(session: Option<&AuthContext>) -> (Self, Option<Redirect>) {
        session.map_or((Self::Unauthenticated, Some(Redirect::Login)), |ctx| {
            (Self::Authenticated(ctx.role().cloned()), None)
        })
    }

    #[must_use]
    pub const fn logout() -> (Self, Redirect) {
        (Self::Unauthenticated, Redirect::Login)
    }

    #[must_use]
    pub fn render(&self) -> Render {
        match self {
            Self::Unknown | Self::Unauthenticated => Render::Nothing,
            Self::Authenticated(Some(role)) if role.is_dashboard_member() => Render::Protected,
            Self::Authenticated(_) => Render::Restricted,
        }
    }
}

/// Credential plus its decoded claims, built once per activation and handed to
/// the view and its API calls.
#[derive(Clone)]
pub struct AuthContext {
    token: String,
    claims: Option<Claims>,
}

impl AuthContext {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let claims = claims::decode(&token);
        Self { token, claims }
    }

    #[must_use]
    pub fn bearer(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.claims.as_ref().and_then(|c| c.role.as_ref())
    }

    #[must_use]
    pub fn identity(&self) -> SessionIdentity {
        self.claims
            .as_ref()
            .map_or_else(SessionIdentity::default, Claims::to_identity)
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("token", &"[REDACTED]")
            .field("role", &self.role())
            .finish()
    }
}

/// Performs redirects. The CLI prints where the user should go next.
pub trait Navigator {
    fn navigate(&self, to: Redirect);
}

/// Navigator that records every redirect it is asked to perform.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<Redirect>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visits(&self) -> Vec<Redirect> {
        self.visits
            .lock()
            .map(|v| v.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, to: Redirect) {
        if let Ok(mut visits) = self.visits.lock() {
            visits.push(to);
        }
    }
}

/// Outcome of entering a protected view.
#[derive(Debug, Clone)]
pub enum Admission {
    Granted(AuthContext),
    Restricted(AuthContext),
    Redirected,
}

impl Admission {
    #[must_use]
    pub const fn context(&self) -> Option<&AuthContext> {
        match self {
            Self::Granted(ctx) | Self::Restricted(ctx) => Some(ctx),
            Self::Redirected => None,
        }
    }
}

pub struct SessionGate<'a> {
    store: &'a TokenStore,
    state: GateState,
}

impl<'a> SessionGate<'a> {
    #[must_use]
    pub fn new(store: &'a TokenStore) -> Self {
        Self {
            store,
            state: GateState::Unknown,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GateState {
        &self.state
    }

    /// Activate a protected view.
    pub fn enter(&mut self, navigator: &dyn Navigator) -> Admission {
        let session = self.store.get().map(AuthContext::new);
        let (state, redirect) = GateState::activate(session.as_ref());
        tracing::debug!(?state, "session gate activated");
        self.state = state;

        if let Some(to) = redirect {
            navigator.navigate(to);
        }

        match (self.state.render(), session) {
            (Render::Protected, Some(ctx)) => Admission::Granted(ctx),
            (Render::Restricted, Some(ctx)) => Admission::Restricted(ctx),
            _ => Admission::Redirected,
        }
    }

    /// Activate the login or signup view. A stored credential sends the user
    /// to the dashboard instead.
    pub fn enter_login(&mut self, navigator: &dyn Navigator) -> bool {
        if self.store.get().is_some() {
            navigator.navigate(Redirect::Dashboard);
            return false;
        }
        self.state = GateState::Unauthenticated;
        true
    }

    /// Clear the session and redirect to login. The transition and redirect
    /// happen even if the store could not be cleared.
    pub fn logout(&mut self, navigator: &dyn Navigator) -> Result<(), AuthError> {
        let cleared = self.store.clear();
        let (state, redirect) = GateState::logout();
        self.state = state;
        navigator.navigate(redirect);
        cleared
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn unknown_renders_nothing() {
        assert_eq!(GateState::default().render(), Render::Nothing);
    }

    #[test]
    fn absent_session_redirects_to_login() {
        let (state, redirect) = GateState::activate(None);
        assert_eq!(state, GateState::Unauthenticated);
        assert_eq!(redirect, Some(Redirect::Login));
        assert_eq!(state.render(), Render::Nothing);
    }

    #[rstest]
    #[case::admin(r#"{"role":"admin"}"#, Render::Protected)]
    #[case::owner(r#"{"role":"associationOwner"}"#, Render::Protected)]
    #[case::member(r#"{"role":"member"}"#, Render::Restricted)]
    #[case::no_role(r#"{"sub":"u"}"#, Render::Restricted)]
    #[case::numeric_role(r#"{"role":1}"#, Render::Restricted)]
    fn render_follows_role(#[case] payload: &str, #[case] expected: Render) {
        let ctx = AuthContext::new(token_with(payload));
        let (state, redirect) = GateState::activate(Some(&ctx));
        assert_eq!(redirect, None);
        assert_eq!(state.render(), expected);
    }

    #[test]
    fn undecodable_credential_is_authenticated_without_role() {
        let ctx = AuthContext::new("garbage");
        let (state, _) = GateState::activate(Some(&ctx));
        assert_eq!(state, GateState::Authenticated(None));
        assert_eq!(state.render(), Render::Restricted);
    }

    #[test]
    fn logout_transition_redirects() {
        assert_eq!(
            GateState::logout(),
            (GateState::Unauthenticated, Redirect::Login)
        );
    }

    #[test]
    fn context_debug_hides_token() {
        let ctx = AuthContext::new(token_with(r#"{"role":"admin"}"#));
        let debug = format!("{ctx:?}");
        assert!(!debug.contains(ctx.bearer()));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn enter_login_with_stored_credential_goes_to_dashboard() {
        let store = TokenStore::in_memory();
        store.set(&token_with(r#"{"role":"admin"}"#), 7).unwrap();
        let nav = RecordingNavigator::new();
        assert!(!SessionGate::new(&store).enter_login(&nav));
        assert_eq!(nav.visits(), vec![Redirect::Dashboard]);
    }

    #[test]
    fn enter_login_without_credential_shows_form() {
        let store = TokenStore::in_memory();
        let nav = RecordingNavigator::new();
        let mut gate = SessionGate::new(&store);
        assert!(gate.enter_login(&nav));
        assert!(nav.visits().is_empty());
        assert_eq!(gate.state(), &GateState::Unauthenticated);
    }

    #[test]
    fn redirect_routes() {
        assert_eq!(Redirect::Login.route(), "/login");
        assert_eq!(Redirect::Dashboard.route(), "/");
    }
}

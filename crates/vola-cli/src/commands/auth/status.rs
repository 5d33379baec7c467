use serde::Serialize;
use vola_auth::AuthContext;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::table::{TableOptions, render_record};
use crate::output::{TableView, cell, output, yes_no};

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    role: Option<String>,
    dashboard_access: bool,
    subject: Option<String>,
    email: Option<String>,
    expires_at: Option<String>,
    token_source: Option<String>,
    secure: Option<bool>,
    same_site: Option<String>,
}

impl TableView for AuthStatusResponse {
    fn render_table(&self, options: TableOptions) -> String {
        render_record(
            &[
                ("authenticated", yes_no(self.authenticated)),
                ("role", cell(self.role.as_deref())),
                ("dashboard access", yes_no(self.dashboard_access)),
                ("email", cell(self.email.as_deref())),
                ("expires", cell(self.expires_at.as_deref())),
                ("source", cell(self.token_source.as_deref())),
            ],
            options,
        )
    }
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = match ctx.store.cookie() {
        Some(cookie) => {
            let identity = AuthContext::new(&cookie.value).identity();
            AuthStatusResponse {
                authenticated: true,
                role: identity.role.as_ref().map(ToString::to_string),
                dashboard_access: identity.is_dashboard_member(),
                subject: identity.subject,
                email: identity.email,
                expires_at: Some(cookie.expires_at.to_rfc3339()),
                token_source: ctx.store.source().map(str::to_string),
                secure: Some(cookie.secure),
                same_site: Some(cookie.same_site.to_string()),
            }
        }
        None => AuthStatusResponse {
            authenticated: false,
            role: None,
            dashboard_access: false,
            subject: None,
            email: None,
            expires_at: None,
            token_source: None,
            secure: None,
            same_site: None,
        },
    };
    output(&status, flags.format)
}

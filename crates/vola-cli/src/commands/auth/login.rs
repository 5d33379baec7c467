use serde::Serialize;
use vola_auth::{SessionGate, claims};
use vola_core::entities::LoginRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::commands::shared::{access, input};
use crate::context::AppContext;
use crate::navigator::CliNavigator;
use crate::notice::{self, Notice};
use crate::output::table::{TableOptions, render_record};
use crate::output::{TableView, cell, output};
use crate::progress::with_spinner;

const FALLBACK: &str = "Login failed.";

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    email: String,
    role: Option<String>,
    expires_at: Option<String>,
}

impl TableView for AuthLoginResponse {
    fn render_table(&self, options: TableOptions) -> String {
        render_record(
            &[
                ("email", self.email.clone()),
                ("role", cell(self.role.as_deref())),
                ("expires", cell(self.expires_at.as_deref())),
            ],
            options,
        )
    }
}

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !args.force && !SessionGate::new(&ctx.store).enter_login(&CliNavigator) {
        return Ok(());
    }

    let request = LoginRequest {
        email: args.email.trim().to_string(),
        password: input::password(args.password.as_deref())?,
    };

    let profile = with_spinner("Signing in...", ctx.client.login(&request))
        .await
        .map_err(|error| access::api_failure(&error, FALLBACK, flags.verbose))?;

    let Some(token) = profile.token.as_deref().filter(|t| !t.is_empty()) else {
        return Err(notice::fail(&Notice::error(FALLBACK)));
    };

    Notice::success("Login successful!").show();
    let role = claims::role_of(token)
        .or_else(|| profile.role.clone())
        .map(|role| role.to_string());
    output(
        &AuthLoginResponse {
            authenticated: true,
            email: profile.email,
            role,
            expires_at: ctx.store.cookie().map(|c| c.expires_at.to_rfc3339()),
        },
        flags.format,
    )
}

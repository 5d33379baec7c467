use serde::Serialize;
use vola_auth::SessionGate;
use vola_core::entities::{AssociationData, Gender, RegisterRequest};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::{AuthSignupArgs, GenderArg};
use crate::commands::shared::{access, input};
use crate::context::AppContext;
use crate::navigator::CliNavigator;
use crate::notice::{self, Notice};
use crate::output::table::{TableOptions, render_record};
use crate::output::{TableView, output, yes_no};
use crate::progress::with_spinner;

const FALLBACK: &str = "Signup failed.";

#[derive(Serialize)]
struct AuthSignupResponse {
    registered: bool,
    email: String,
    association: String,
    session_saved: bool,
}

impl TableView for AuthSignupResponse {
    fn render_table(&self, options: TableOptions) -> String {
        render_record(
            &[
                ("email", self.email.clone()),
                ("association", self.association.clone()),
                ("session saved", yes_no(self.session_saved)),
            ],
            options,
        )
    }
}

const fn gender(arg: GenderArg) -> Gender {
    match arg {
        GenderArg::Male => Gender::Male,
        GenderArg::Female => Gender::Female,
    }
}

fn build_request(args: &AuthSignupArgs, password: String) -> RegisterRequest {
    let request = RegisterRequest::association_owner(
        args.email.trim().to_string(),
        password,
        args.name.trim().to_string(),
        args.age,
        gender(args.gender),
        args.country.trim().to_string(),
        args.city.trim().to_string(),
        AssociationData {
            name: args.association_name.trim().to_string(),
            description: args.association_description.trim().to_string(),
        },
    );
    match &args.profile_picture {
        Some(url) => request.with_profile_picture(url.trim()),
        None => request,
    }
}

pub async fn handle(args: &AuthSignupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !args.force && !SessionGate::new(&ctx.store).enter_login(&CliNavigator) {
        return Ok(());
    }

    let request = build_request(args, input::password(args.password.as_deref())?);
    if let Err(error) = request.validate() {
        return Err(notice::fail(&Notice::error(error.to_string())));
    }

    let receipt = with_spinner("Creating account...", ctx.client.register(&request))
        .await
        .map_err(|error| access::api_failure(&error, FALLBACK, flags.verbose))?;

    Notice::success("Signup successful! Token saved.").show();
    output(
        &AuthSignupResponse {
            registered: true,
            email: request.email.clone(),
            association: request.association_data.name.clone(),
            session_saved: receipt.token.is_some(),
        },
        flags.format,
    )
}

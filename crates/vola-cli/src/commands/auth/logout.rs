use serde::Serialize;
use vola_auth::SessionGate;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::navigator::CliNavigator;
use crate::output::table::TableOptions;
use crate::output::{TableView, output};

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

impl TableView for AuthLogoutResponse {
    fn render_table(&self, _options: TableOptions) -> String {
        "Signed out.".to_string()
    }
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    SessionGate::new(&ctx.store).logout(&CliNavigator)?;
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}

use serde::Serialize;
use vola_api::ApiError;
use vola_auth::gate::{RESTRICTED_NOTICE, RESTRICTED_TITLE};
use vola_auth::{Admission, AuthContext, SessionGate};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::navigator::CliNavigator;
use crate::notice::{Notice, NoticeShown};
use crate::output::table::TableOptions;
use crate::output::{TableView, cell, output};

#[derive(Serialize)]
struct RestrictedResponse {
    restricted: bool,
    role: Option<String>,
    title: &'static str,
    notice: &'static str,
}

impl TableView for RestrictedResponse {
    fn render_table(&self, _options: TableOptions) -> String {
        format!(
            "{}\n{}\nSigned in as: {}",
            self.title,
            self.notice,
            cell(self.role.as_deref())
        )
    }
}

/// Pass the session gate for a protected view.
///
/// `Ok(None)` means the view already rendered the restricted notice. A
/// redirect to login ends the command with exit code 1 after its notice.
pub fn admit(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Option<AuthContext>> {
    let mut gate = SessionGate::new(&ctx.store);
    match gate.enter(&CliNavigator) {
        Admission::Granted(session) => Ok(Some(session)),
        Admission::Restricted(session) => {
            output(
                &RestrictedResponse {
                    restricted: true,
                    role: session.role().map(ToString::to_string),
                    title: RESTRICTED_TITLE,
                    notice: RESTRICTED_NOTICE,
                },
                flags.format,
            )?;
            Ok(None)
        }
        Admission::Redirected => Err(anyhow::Error::new(NoticeShown)),
    }
}

/// Notices for a failed API call: the normalized message, then every field
/// error when `verbose` is set.
fn failure_notices(error: &ApiError, fallback: &str, verbose: bool) -> Vec<Notice> {
    let mut notices = vec![Notice::failure(&error.message(), fallback)];
    if verbose {
        notices.extend(
            error
                .field_messages()
                .into_iter()
                .map(|message| Notice::info(format!("  - {message}"))),
        );
    }
    notices
}

/// Turn a failed API call into a one-shot error notice.
pub fn api_failure(error: &ApiError, fallback: &str, verbose: bool) -> anyhow::Error {
    tracing::debug!(?error, "api call failed");
    for notice in failure_notices(error, fallback, verbose) {
        notice.show();
    }
    anyhow::Error::new(NoticeShown)
}

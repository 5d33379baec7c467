use vola_auth::{Navigator, Redirect};

use crate::notice::Notice;

/// Navigator for a terminal: tells the user which command to run next.
pub struct CliNavigator;

impl CliNavigator {
    pub fn notice_for(to: Redirect) -> Notice {
        match to {
            Redirect::Login => Notice::info("Not signed in. Run `vola auth login` to continue."),
            Redirect::Dashboard => {
                Notice::info("Already signed in. Run `vola dashboard`, or pass --force.")
            }
        }
    }
}

impl Navigator for CliNavigator {
    fn navigate(&self, to: Redirect) {
        tracing::debug!(route = to.route(), "redirect");
        Self::notice_for(to).show();
    }
}

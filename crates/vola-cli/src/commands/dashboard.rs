use serde::Serialize;
use vola_core::Role;

use crate::cli::GlobalFlags;
use crate::commands::shared::access;
use crate::context::AppContext;
use crate::output::table::{TableOptions, render_table};
use crate::output::{TableView, cell, output};

#[derive(Serialize, Debug, PartialEq, Eq)]
struct NavEntry {
    label: &'static str,
    command: &'static str,
}

/// Sidebar entries of the dashboard shell.
const NAVIGATION: [NavEntry; 3] = [
    NavEntry {
        label: "General Stats",
        command: "vola stats",
    },
    NavEntry {
        label: "Plans",
        command: "vola plans list",
    },
    NavEntry {
        label: "Applications",
        command: "",
    },
];

#[derive(Serialize)]
struct DashboardResponse {
    role: Option<String>,
    email: Option<String>,
    navigation: &'static [NavEntry],
}

impl TableView for DashboardResponse {
    fn render_table(&self, options: TableOptions) -> String {
        let rows = self
            .navigation
            .iter()
            .map(|entry| {
                let command = if entry.command.is_empty() {
                    "(coming soon)".to_string()
                } else {
                    entry.command.to_string()
                };
                vec![entry.label.to_string(), command]
            })
            .collect::<Vec<_>>();
        format!(
            "Signed in as {} ({})\n\n{}",
            cell(self.email.as_deref()),
            cell(self.role.as_deref()),
            render_table(&["section", "command"], &rows, options)
        )
    }
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(auth) = access::admit(ctx, flags)? else {
        return Ok(());
    };
    let identity = auth.identity();
    output(
        &DashboardResponse {
            role: identity.role.as_ref().map(Role::to_string),
            email: identity.email,
            navigation: &NAVIGATION,
        },
        flags.format,
    )
}

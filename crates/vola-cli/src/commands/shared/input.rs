use std::io::{BufRead, IsTerminal};

use anyhow::Context;
use dialoguer::Password;

/// Where the password comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PasswordSource {
    Flag,
    /// Hidden prompt on the terminal.
    Prompt,
    /// One line from piped stdin.
    Piped,
}

const fn source(has_flag: bool, stdin_is_tty: bool) -> PasswordSource {
    if has_flag {
        PasswordSource::Flag
    } else if stdin_is_tty {
        PasswordSource::Prompt
    } else {
        PasswordSource::Piped
    }
}

/// Use the flag value, prompt without echo on a terminal, or read one line
/// from piped stdin.
pub fn password(flag: Option<&str>) -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    match (source(flag.is_some(), stdin.is_terminal()), flag) {
        (PasswordSource::Flag, Some(password)) => Ok(password.to_string()),
        (PasswordSource::Prompt, _) => Password::new()
            .with_prompt("Password")
            .interact()
            .context("failed to read password"),
        _ => read_password(&mut stdin.lock()),
    }
}

fn read_password(reader: &mut impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        anyhow::bail!("password is required: pass --password or pipe it on stdin");
    }
    Ok(password)
}

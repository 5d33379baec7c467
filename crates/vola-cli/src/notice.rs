//! One-shot user notices on stderr.
//!
//! A failed API call in a view becomes a single error notice and exit code 1.
//! [`NoticeShown`] marks errors whose message already reached the user so
//! `main` does not print them a second time.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Error notice for a failed action, with a fallback for blank messages.
    pub fn failure(message: &str, fallback: &str) -> Self {
        let message = message.trim();
        Self::error(if message.is_empty() { fallback } else { message })
    }

    pub fn render(&self) -> String {
        match self.kind {
            NoticeKind::Success | NoticeKind::Info => self.message.clone(),
            NoticeKind::Error => format!("error: {}", self.message),
        }
    }

    pub fn show(&self) {
        eprintln!("{}", self.render());
    }
}

/// The user has already been told what went wrong.
#[derive(Debug)]
pub struct NoticeShown;

impl fmt::Display for NoticeShown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("notice shown")
    }
}

impl std::error::Error for NoticeShown {}

/// Show an error notice and return the marker error for a non-zero exit.
pub fn fail(notice: &Notice) -> anyhow::Error {
    notice.show();
    anyhow::Error::new(NoticeShown)
}

pub fn already_shown(error: &anyhow::Error) -> bool {
    error.downcast_ref::<NoticeShown>().is_some()
}

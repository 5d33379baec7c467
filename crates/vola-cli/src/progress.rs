use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Spinner shown while a request is in flight. Inert when progress is off.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        if let Some(bar) = &self.bar {
            if !bar.is_finished() {
                bar.finish_and_clear();
            }
        }
    }
}

/// Run a request future behind a spinner.
pub async fn with_spinner<T, E, F>(message: &str, future: F) -> Result<T, E>
where
    F: std::future::Future<Output = Result<T, E>>,
{
    let progress = Progress::spinner(message);
    let result = future.await;
    match &result {
        Ok(_) => progress.finish_clear(),
        Err(_) => progress.finish_err("failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use indicatif::ProgressDrawTarget;

    use super::*;

    fn hidden_spinner() -> Progress {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden());
        Progress { bar: Some(bar) }
    }

    #[test]
    fn dropping_an_unfinished_spinner_clears_it() {
        let progress = hidden_spinner();
        let bar = progress.bar.clone().unwrap();
        assert!(!bar.is_finished());
        drop(progress);
        assert!(bar.is_finished());
    }

    #[test]
    fn dropping_an_abandoned_spinner_keeps_its_state() {
        let progress = hidden_spinner();
        let bar = progress.bar.clone().unwrap();
        progress.finish_err("failed");
        drop(progress);
        assert!(bar.is_finished());
        assert_eq!(bar.message(), "failed");
    }

    #[test]
    fn inert_spinner_drops_quietly() {
        drop(Progress { bar: None });
    }
}

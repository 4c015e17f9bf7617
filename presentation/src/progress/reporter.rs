//! Progress reporting while a reply is generated

use brainbytes_application::ports::progress::ProgressNotifier;
use brainbytes_domain::Model;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner while the model call is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.spinner.lock() {
            if let Some(bar) = guard.take() {
                bar.finish_and_clear();
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_model_request_start(&self, model: &Model) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(format!("Thinking... ({model})"));
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(bar);
        }
    }

    fn on_model_request_end(&self, _model: &Model, _success: bool) {
        self.clear();
    }
}

impl Drop for ProgressReporter {
    // The spinner must not outlive an abandoned request (deadline race)
    fn drop(&mut self) {
        self.clear();
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_model_request_start(&self, model: &Model) {
        println!("{} asking {}", "->".cyan(), model.to_string().bold());
    }

    fn on_model_request_end(&self, _model: &Model, success: bool) {
        if success {
            println!("  {} answer received", "v".green());
        } else {
            println!("  {} model unavailable, using fallback", "x".red());
        }
    }
}

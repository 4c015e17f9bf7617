//! Progress notification port
//!
//! Defines the interface for reporting progress while a question is being
//! answered. The only long operation is the model call, so the surface is
//! small.

use brainbytes_domain::Model;

/// Callback for progress updates during reply generation
///
/// Implementations live in the presentation layer and can display progress
/// however they like (spinner, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the model request is sent
    fn on_model_request_start(&self, model: &Model);

    /// Called when the model request resolves, successfully or not
    fn on_model_request_end(&self, model: &Model, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_model_request_start(&self, _model: &Model) {}
    fn on_model_request_end(&self, _model: &Model, _success: bool) {}
}

//! Injected confirmation/notification capability.
//!
//! The original flows block on yes/no and acknowledgement dialogs. Keeping
//! that behind a trait lets the core run headless and lets front ends supply
//! blocking, queued, or non-interactive implementations.

/// User-facing confirmation and notification prompts.
pub trait Prompter {
    /// Ask a yes/no question; `true` means proceed.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show an acknowledgement-only notice.
    fn notify(&mut self, message: &str);
}

/// A prompter that confirms everything and discards notices.
///
/// For headless embeddings and scripts where no user is present to ask.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Prompter for AutoConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }

    fn notify(&mut self, _message: &str) {}
}

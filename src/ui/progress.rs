//! Spinner for the wait command

use super::context::UiContext;
use super::output::{status, Status};

/// Spinner on a terminal, a pair of status lines otherwise
pub struct TaskSpinner {
    ctx: UiContext,
    spinner: Option<cliclack::ProgressBar>,
}

impl TaskSpinner {
    /// Show `message` until [`finish`](Self::finish) is called
    pub fn start(ctx: UiContext, message: &str) -> Self {
        let spinner = if ctx.use_fancy_output() {
            let spinner = cliclack::spinner();
            spinner.start(message);
            Some(spinner)
        } else {
            status(&ctx, Status::Info, message);
            None
        };
        Self { ctx, spinner }
    }

    /// Replace the spinner with a final `Ok` or `Fail` line
    pub fn finish(self, kind: Status, message: &str) {
        match self.spinner {
            Some(spinner) if kind == Status::Fail => spinner.error(message),
            Some(spinner) => spinner.stop(message),
            None => status(&self.ctx, kind, message),
        }
    }
}

//! Whether stderr is a terminal a person is watching

use std::io::IsTerminal;

/// Environment variables that mark a non-interactive session
const PLAIN_OUTPUT_VARS: &[&str] = &["CI", "MOUNTKEEPER_PLAIN", "GITHUB_ACTIONS", "GITLAB_CI"];

/// UI context that determines output behavior
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    interactive: bool,
}

impl UiContext {
    /// Detect the current environment
    pub fn detect() -> Self {
        Self {
            interactive: Self::detect_interactive(),
        }
    }

    /// Create a non-interactive context
    pub fn non_interactive() -> Self {
        Self { interactive: false }
    }

    /// Spinners and `cliclack` styling instead of plain tagged lines
    pub fn use_fancy_output(&self) -> bool {
        self.interactive
    }

    fn detect_interactive() -> bool {
        // status lines and spinners draw on stderr
        if !std::io::stderr().is_terminal() {
            return false;
        }

        !PLAIN_OUTPUT_VARS
            .iter()
            .any(|var| std::env::var_os(var).is_some())
    }
}

//! Terminal output helpers
//!
//! Status lines and spinners go to stderr. Stdout carries only command
//! results (names, paths, listings), so a launcher can capture it as-is.
//! On a terminal `cliclack` draws the output; otherwise each status is a
//! plain tagged line.

mod context;
mod output;
mod progress;

pub use context::UiContext;
pub use output::{status, Status};
pub use progress::TaskSpinner;

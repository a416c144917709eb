//! Status lines on stderr

use super::context::UiContext;
use console::{style, StyledObject};
use std::fmt::Display;

/// Kind of status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Info,
    Warn,
    Fail,
}

impl Status {
    /// Tag used when output is not a terminal
    fn tag(self) -> StyledObject<&'static str> {
        let tag = match self {
            Status::Ok => style("[ok]").green(),
            Status::Info => style("[info]").cyan(),
            Status::Warn => style("[warn]").yellow(),
            Status::Fail => style("[fail]").red(),
        };
        tag.for_stderr()
    }
}

/// Report a status to the user without touching stdout
pub fn status(ctx: &UiContext, kind: Status, message: impl Display) {
    if !ctx.use_fancy_output() {
        eprintln!("{} {}", kind.tag(), message);
        return;
    }

    let message = message.to_string();
    let drawn = match kind {
        Status::Ok => cliclack::log::success(&message),
        Status::Info => cliclack::log::info(&message),
        Status::Warn => cliclack::log::warning(&message),
        Status::Fail => cliclack::log::error(&message),
    };
    // the terminal went away; the plain line is still worth a try
    if drawn.is_err() {
        eprintln!("{} {}", kind.tag(), message);
    }
}

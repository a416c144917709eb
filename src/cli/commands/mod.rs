//! CLI command implementations

pub mod account;
pub mod check;
pub mod config;
pub mod list;
pub mod path;
pub mod unit;
pub mod wait;

pub use account::execute as account;
pub use check::execute as check;
pub use config::execute as config;
pub use list::execute as list;
pub use path::execute as path;
pub use unit::execute as unit;
pub use wait::execute as wait;

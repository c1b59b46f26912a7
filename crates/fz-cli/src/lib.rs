mod args;
mod commands;
mod logging;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::{run, stderr_color};

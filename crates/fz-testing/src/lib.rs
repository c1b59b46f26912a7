//! Testing infrastructure for fz tests.
//!
//! - `fixtures`: go-fuzz status line builders
//! - `process`: background process management for the `fz` binary

pub mod fixtures;
pub mod process;

pub use fixtures::{SAMPLE_LINE, StatusLine};

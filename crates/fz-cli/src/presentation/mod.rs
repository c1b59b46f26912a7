//! Console presentation for fz.
//!
//! `formatters/` holds string helpers, `views/` the `Display` layouts for the
//! live line and the summary, and `renderers/` drives them onto stdout.

pub mod formatters;
pub mod renderers;
pub mod views;

pub use formatters::FormatOptions;
pub use renderers::ConsoleView;

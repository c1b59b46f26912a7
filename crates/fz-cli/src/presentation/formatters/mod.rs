pub mod number;
pub mod options;
pub mod style;
pub mod time;

pub use options::FormatOptions;

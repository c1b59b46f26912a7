// Engine module - interpretation of go-fuzz output
// Sits between raw text lines and the stream controller: parsing, trends, summaries

pub mod duration;
pub mod parser;
pub mod summary;
pub mod trend;

pub use duration::parse_go_duration;
pub use parser::{DEFAULT_SHUTDOWN_MARKER, is_shutdown_marker, parse};
pub use summary::Summary;
pub use trend::{Trend, TrendSet, compare, gain};

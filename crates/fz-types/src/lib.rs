// Types layer - plain data shared by the parser, the stream controller and the CLI.
// Nothing here performs I/O.

pub mod error;
pub mod record;

pub use error::{ConversionError, MIN_SEGMENTS, ParseError, ParseErrorKind, Result};
pub use record::{Field, Record};

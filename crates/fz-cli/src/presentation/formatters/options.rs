/// Display formatting options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub enable_color: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { enable_color: true }
    }
}

impl FormatOptions {
    pub fn plain() -> Self {
        Self {
            enable_color: false,
        }
    }
}

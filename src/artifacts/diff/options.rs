use crate::artifacts::diff::format::{Theme, theme_auto};
use crate::artifacts::lcs::sequence::{Split, split};
use std::time::Duration;

/// Lines of context kept around each change
pub const DEFAULT_CONTEXT: isize = 1;
/// Budget of one diff before the LCS search settles for what it found
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy)]
pub struct DiffOptions {
    pub context: isize,
    /// `None` never cancels
    pub timeout: Option<Duration>,
    pub theme: Theme,
    /// Word splitter of the changed-words pass
    pub split: Split,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context: DEFAULT_CONTEXT,
            timeout: Some(DEFAULT_TIMEOUT),
            theme: theme_auto(),
            split,
        }
    }
}

impl DiffOptions {
    pub fn with_context(mut self, context: isize) -> Self {
        self.context = context;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_split(mut self, split: Split) -> Self {
        self.split = split;
        self
    }
}

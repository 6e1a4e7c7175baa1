//! Yet another diff: an LCS-driven text diffing engine
//!
//! The engine turns two texts into a human-readable, context-windowed and
//! optionally styled diff:
//!
//! ```text
//! text -> Sequence -> Histogram/Occurrence -> Common/Reduce -> LCS indices
//!      -> Tokens -> Chunked tokens -> Formatted string
//! ```
//!
//! - `artifacts`: engine data structures and algorithms (LCS, tokens, styles)
//! - `areas`: the diff session used by the binary
//! - `commands`: operations exposed by the `yadiff` binary
//!
//! ## Quick start
//!
//! ```
//! use yadiff::artifacts::diff::format::{format, theme_none};
//! use yadiff::artifacts::diff::tokenize::tokenize_text;
//! use yadiff::artifacts::core::cancel::Cancel;
//!
//! let tokens = tokenize_text("a\nb", "a\nc", &Cancel::never());
//! assert_eq!(format(&tokens, theme_none), "1 1   a\n2   - b\n  2 + c\n");
//! ```

/// Macro for debug logging that is enabled with the `debug_lcs` feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("piles after y[{}]: {}", i, piles.len());
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_lcs")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod areas;
pub mod artifacts;
pub mod commands;

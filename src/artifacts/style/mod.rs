//! Terminal styles for rendered diffs
//!
//! - `style`: ANSI SGR style pairs, `stylize`, and the helpers to strip or
//!   visualize escape codes
//! - `nested`: normalisation of nested style spans so an inner style never
//!   leaks into, or swallows, the outer one

pub mod nested;
pub mod style;

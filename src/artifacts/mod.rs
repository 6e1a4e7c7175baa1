//! Diff engine data structures and algorithms
//!
//! - `core`: shared utilities (cancellation, pager wrapper)
//! - `lcs`: sequences, reduction and the LIS-based LCS solver
//! - `diff`: tokens, context narrowing and rendering
//! - `style`: ANSI styles and nested style normalisation

pub mod core;
pub mod diff;
pub mod lcs;
pub mod style;

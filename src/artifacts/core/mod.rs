//! Core utilities and shared types
//!
//! - `cancel`: cooperative cancellation for long-running LCS solves
//! - `pager`: `Write` adapter over the minus pager used by the binary

pub mod cancel;
pub mod pager;

//! `yadiff` command implementations
//!
//! - `plumbing`: low-level views of the engine (`lcs`, `words`)
//! - `porcelain`: the user-facing `diff`
//!
//! Each command is an `impl Session` block that reads its inputs, runs the
//! engine and writes to the session writer.

pub mod plumbing;
pub mod porcelain;

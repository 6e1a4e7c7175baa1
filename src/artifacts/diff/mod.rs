//! Line diffs rendered from the LCS
//!
//! - `token`: typed tokens, token lines and hunks of changed lines
//! - `tokenize`: the line level walk and the changed-words pass
//! - `narrow`: context windows and chunk markers
//! - `format`: themes and rendering, plus the `diff` entry points
//! - `options`: context size, timeout, theme and word splitter

pub mod format;
pub mod narrow;
pub mod options;
pub mod token;
pub mod tokenize;

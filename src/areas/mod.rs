//! Components shared by the `yadiff` commands
//!
//! - `session`: output writer and diff options of one invocation

pub mod session;

//! Longest common subsequence engine
//!
//! - `sequence`: comparable elements, keys and sequence construction
//! - `histogram`: key to positions index and the occurrence bridge to the solver
//! - `reduce`: common prefix/suffix and histogram based reduction
//! - `indices`: LCS index lists and their run-length compression
//! - `yad`: the LIS-based solver with its pooled backtracking nodes
//! - `solution`: the full pipeline (affixes, reduction, solve, re-attach)
//! - `standard`: the O(|x|·|y|) DP reference

pub mod histogram;
pub mod indices;
pub mod reduce;
pub mod sequence;
pub mod solution;
pub mod standard;
pub mod yad;

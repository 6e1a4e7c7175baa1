pub mod lcs;
pub mod words;

pub mod backtrack;
pub mod recursive;

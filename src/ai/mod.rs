pub mod eval;
pub mod search;

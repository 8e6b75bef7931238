pub mod center;
pub mod search;

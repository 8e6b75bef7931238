pub mod diagnostics;
pub mod page;
pub mod search;

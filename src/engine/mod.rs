pub mod search;
pub mod summary;

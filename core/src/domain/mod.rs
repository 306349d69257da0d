pub mod common;
pub mod dietary_analysis;
pub mod history;
pub mod ingredient;
pub mod product;
pub mod restriction;
pub mod verdict;

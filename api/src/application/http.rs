pub mod dietary_analysis;
pub mod health;
pub mod history;
pub mod product;
pub mod profile;
pub mod server;
pub mod verdict;

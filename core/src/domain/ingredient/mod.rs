pub mod classifier;
pub mod entities;

pub use classifier::{classify, matched_avoid_terms, split_ingredients};
pub use entities::*;

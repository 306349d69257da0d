pub mod entities;
pub mod fallback;
pub mod in_flight;
pub mod parser;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use fallback::{basic_ingredient_risks, fallback_analysis, nutrient_concerns};
pub use value_objects::*;

pub mod entities;
pub mod registry;
pub mod toggles;

pub use entities::*;
pub use registry::{get_profile, list_profiles};
pub use toggles::*;

pub mod get_profile;
pub mod get_profile_explanation;
pub mod get_profiles;

use nutrilens_core::domain::{
    dietary_analysis::entities::DietaryAnalysis, product::value_objects::ProductInput,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateHistoryEntryValidator {
    pub product: ProductInput,

    pub analysis: DietaryAnalysis,

    #[validate(length(min = 1, message = "profile_id is required"))]
    pub profile_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// Number of rows to return, newest first. Defaults to 15.
    pub limit: Option<usize>,
}

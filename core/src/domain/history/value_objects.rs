use serde::{Deserialize, Serialize};

use crate::domain::{dietary_analysis::entities::DietaryAnalysis, product::entities::Product};

/// Rows returned when the caller does not ask for a specific count.
pub const DEFAULT_HISTORY_LIMIT: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordScanInput {
    pub product: Product,
    pub analysis: DietaryAnalysis,
    pub profile_id: String,
}

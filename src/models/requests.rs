use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for ranked housing recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "seeker_id", rename = "seekerId")]
    pub seeker_id: String,
}

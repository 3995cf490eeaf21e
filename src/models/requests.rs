use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::MatchFilters;

/// Request to find co-founder matches for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default = "default_limit")]
    pub limit: u16,
    #[serde(default)]
    pub filters: Option<MatchFilters>,
}

fn default_limit() -> u16 {
    20
}

/// Request for a single-pair compatibility report ("why this match")
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompatibilityRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "targetUserId", rename = "targetUserId")]
    pub target_user_id: String,
}

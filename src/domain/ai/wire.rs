//! Wire types for the AI endpoints (REST).

use serde::{Deserialize, Serialize};

/// A personalized task recommendation from `GET /ai/recommendations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// How strongly this matched the user's interest graph. Higher is
    /// better; the scale is the backend's business.
    pub relevance_score: f64,
}

/// `POST /ai/feedback` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub recommendation_id: String,
    pub feedback: FeedbackKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// User verdict on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Helpful,
    NotHelpful,
    Dismissed,
}

//! AI sub-client — recommendations, feedback, insights.

use crate::client::FocusFlowClient;
use crate::domain::ai::wire::{FeedbackKind, FeedbackRequest, Recommendation};
use crate::error::SdkError;

pub struct Ai<'a> {
    pub(crate) client: &'a FocusFlowClient,
}

impl<'a> Ai<'a> {
    /// Personalized task recommendations, ranked by relevance.
    pub async fn recommendations(&self) -> Result<Vec<Recommendation>, SdkError> {
        Ok(self.client.http.get_recommendations().await?)
    }

    /// Record the user's verdict on a recommendation.
    pub async fn submit_feedback(
        &self,
        recommendation_id: &str,
        feedback: FeedbackKind,
        comment: Option<&str>,
    ) -> Result<(), SdkError> {
        let request = FeedbackRequest {
            recommendation_id: recommendation_id.to_string(),
            feedback,
            comment: comment.map(str::to_owned),
        };
        self.client.http.submit_feedback(&request).await?;
        Ok(())
    }

    /// Dashboard insights. Shape varies by user, so this stays untyped.
    pub async fn insights(&self) -> Result<serde_json::Value, SdkError> {
        Ok(self.client.http.get_insights().await?)
    }
}

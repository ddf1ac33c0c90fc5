//! Analytics sub-client — dashboard aggregates.

use crate::client::FocusFlowClient;
use crate::error::SdkError;

pub struct Analytics<'a> {
    pub(crate) client: &'a FocusFlowClient,
}

impl<'a> Analytics<'a> {
    /// Per-user aggregates (completion rates, streaks). Chart-shaped JSON,
    /// consumed untyped by the dashboard.
    pub async fn user(&self) -> Result<serde_json::Value, SdkError> {
        Ok(self.client.http.get_user_analytics().await?)
    }

    /// System-wide aggregates.
    pub async fn system(&self) -> Result<serde_json::Value, SdkError> {
        Ok(self.client.http.get_system_analytics().await?)
    }
}

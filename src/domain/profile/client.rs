//! Profile sub-client.

use crate::client::FocusFlowClient;
use crate::domain::profile::wire::Profile;
use crate::error::SdkError;

pub struct ProfileClient<'a> {
    pub(crate) client: &'a FocusFlowClient,
}

impl<'a> ProfileClient<'a> {
    /// Fetch the authenticated user's profile.
    pub async fn get(&self) -> Result<Profile, SdkError> {
        Ok(self.client.http.get_profile().await?)
    }

    /// Replace the profile with the supplied one and return the stored
    /// version.
    pub async fn update(&self, profile: &Profile) -> Result<Profile, SdkError> {
        Ok(self.client.http.update_profile(profile).await?)
    }
}

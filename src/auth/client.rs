//! Auth sub-client — login, registration, logout.

use crate::auth::wire::{LoginRequest, LoginResponse, RegisterRequest, UserSummary};
use crate::client::FocusFlowClient;
use crate::error::SdkError;
use crate::session::SessionTokens;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a FocusFlowClient,
}

impl<'a> Auth<'a> {
    /// Login with email + password and persist the returned token pair in
    /// the session store. Every subsequent request picks the tokens up from
    /// there.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<UserSummary>, SdkError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: LoginResponse = self.client.http.login(&request).await?;
        self.store_session(&resp);
        Ok(resp.user)
    }

    /// Register a new account. The backend logs the new user straight in,
    /// so this also persists the returned token pair.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<UserSummary>, SdkError> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: LoginResponse = self.client.http.register(&request).await?;
        self.store_session(&resp);
        Ok(resp.user)
    }

    /// Logout — tells the server, then clears the local session no matter
    /// what the server said.
    pub async fn logout(&self) -> Result<(), SdkError> {
        let result = self.client.http.logout().await;
        self.client.http.session().clear();
        result.map(|_| ()).map_err(SdkError::from)
    }

    /// Whether a session token pair is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.client.http.session().tokens().is_some()
    }

    fn store_session(&self, resp: &LoginResponse) {
        self.client
            .http
            .session()
            .set_tokens(SessionTokens::new(
                resp.token.clone(),
                resp.refresh_token.clone(),
            ));
    }
}

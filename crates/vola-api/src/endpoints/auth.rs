use vola_core::entities::{AccountProfile, LoginRequest, RegisterRequest, SignupReceipt};

use super::{LOGIN_PATH, REGISTER_PATH};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Exchange credentials for a session. The returned credential is already
    /// persisted when this resolves.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] of the failed submission.
    pub async fn login(&self, request: &LoginRequest) -> Result<AccountProfile, ApiError> {
        self.submit(LOGIN_PATH, request).await
    }

    /// Register an association owner account.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] of the failed submission.
    pub async fn register(&self, request: &RegisterRequest) -> Result<SignupReceipt, ApiError> {
        // Some deployments answer registration with an empty envelope.
        let receipt: Option<SignupReceipt> = self.submit(REGISTER_PATH, request).await?;
        Ok(receipt.unwrap_or_default())
    }
}

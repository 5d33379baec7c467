use vola_auth::AuthContext;
use vola_core::entities::{AssociationOwnerStats, GeneralStats};

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Platform-wide statistics for administrators.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload is malformed.
    pub async fn general_stats(
        &self,
        session: &AuthContext,
        path: &str,
    ) -> Result<GeneralStats, ApiError> {
        self.fetch_resource(path, Some(session)).await
    }

    /// Statistics scoped to the association the session owns.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload is malformed.
    pub async fn association_stats(
        &self,
        session: &AuthContext,
        path: &str,
    ) -> Result<AssociationOwnerStats, ApiError> {
        self.fetch_resource(path, Some(session)).await
    }
}

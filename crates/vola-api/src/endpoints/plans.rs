use serde_json::Value;
use vola_auth::AuthContext;
use vola_core::entities::Plan;

use super::PLANS_PATH;
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// All plans visible to the session. A payload that is not a list reads
    /// as no plans.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or a listed plan is malformed.
    pub async fn list_plans(&self, session: &AuthContext) -> Result<Vec<Plan>, ApiError> {
        let payload: Value = self.fetch_resource(PLANS_PATH, Some(session)).await?;
        match payload {
            Value::Array(_) => serde_json::from_value(payload)
                .map_err(|e| ApiError::Decode(format!("{PLANS_PATH}: {e}"))),
            other => {
                tracing::debug!(kind = json_kind(&other), "plan list payload is not an array");
                Ok(Vec::new())
            }
        }
    }

    /// A single plan, or `None` when the envelope carried no data.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; a missing plan surfaces as a 404 status error.
    pub async fn get_plan(&self, session: &AuthContext, id: &str) -> Result<Option<Plan>, ApiError> {
        let path = format!("{PLANS_PATH}/{}", urlencoding::encode(id));
        self.fetch_resource(&path, Some(session)).await
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

use serde::Serialize;
use utoipa::ToSchema;

/// Uniform JSON envelope returned by every endpoint. The wire keys are the
/// Spanish ones of the original API; absent members are omitted entirely.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(rename = "mensaje", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "cantidad", skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(rename = "datos", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            count: None,
            data: Some(data),
            error: None,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Collection response carrying `cantidad` alongside the rows.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            count: Some(items.len() as i64),
            data: Some(items),
            error: None,
        }
    }
}

impl ApiResponse<serde_json::Value> {
    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            count: None,
            data: None,
            error,
        }
    }
}

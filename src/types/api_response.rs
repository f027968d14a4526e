use serde::{Deserialize, Serialize};

/// Envelope shared by every JSON endpoint: `{ "data": ..., "error": ... }`.
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { data, error: None }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default)]
pub struct GoogleAutocompleteResponsePredictionStructuredFormatting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
pub struct GoogleAutocompleteResponsePrediction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_formatting: Option<GoogleAutocompleteResponsePredictionStructuredFormatting>,
}

#[derive(Serialize, Deserialize, Default)]
pub struct GoogleAutocompleteResponse {
    pub status: String,
    #[serde(default)]
    pub predictions: Vec<GoogleAutocompleteResponsePrediction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

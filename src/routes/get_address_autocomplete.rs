use crate::{
    services::maps_client::{
        maps_service::AutocompleteSearchInput, types::maps_service_error::MapsServiceError,
    },
    types::{api_response::ApiResponse, app_state::AppState},
    utils::{
        app_error::AppError,
        validated_query::{QueryPayload, ValidatedQuery},
    },
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetAddressAutocompletePayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "Search query is required"))]
    pub query: String,
}

impl QueryPayload for GetAddressAutocompletePayload {
    fn rejection_data() -> Value {
        json!([])
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSuggestion {
    pub place_id: String,
    pub main_text: String,
    pub secondary_text: String,
}

pub type GetAddressAutocompleteResponse = ApiResponse<Vec<AddressSuggestion>>;

#[cfg_attr(test, debug_handler)]
pub async fn get_address_autocomplete(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetAddressAutocompletePayload>,
) -> Result<Response, AppError> {
    let suggestions = state
        .maps_service
        .get_autocomplete(AutocompleteSearchInput {
            input: payload.query,
        })
        .await
        .map_err(|e| {
            error!("Autocomplete API error: {}", e);
            let message = match e {
                MapsServiceError::MissingApiKey => "Google Places API key is not configured",
                _ => "Failed to fetch address suggestions",
            };
            AppError::new(StatusCode::INTERNAL_SERVER_ERROR, message).with_data(json!([]))
        })?
        .predictions
        .into_iter()
        .map(|p| AddressSuggestion {
            place_id: p.place_id,
            main_text: p.main_text,
            secondary_text: p.secondary_text,
        })
        .collect::<Vec<AddressSuggestion>>();

    Ok((StatusCode::OK, Json(ApiResponse::ok(suggestions))).into_response())
}

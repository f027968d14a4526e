use crate::{
    services::maps_client::{
        address_normalizer::NormalizedAddress, maps_service::PlaceDetailsInput,
        types::maps_service_error::MapsServiceError,
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
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPlaceDetailsPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "Place ID is required"))]
    pub place_id: String,
}

impl QueryPayload for GetPlaceDetailsPayload {}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPlaceDetailsResponseData {
    pub address: NormalizedAddress,
    pub adr_address: Option<String>,
}

pub type GetPlaceDetailsResponse = ApiResponse<GetPlaceDetailsResponseData>;

#[cfg_attr(test, debug_handler)]
pub async fn get_place_details(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetPlaceDetailsPayload>,
) -> Result<Response, AppError> {
    let details = state
        .maps_service
        .get_place_details(PlaceDetailsInput {
            place_id: payload.place_id,
        })
        .await
        .map_err(|e| {
            error!("Place Details API error: {}", e);
            let message = match e {
                MapsServiceError::MissingApiKey => "Google Places API key is not configured",
                _ => "Failed to fetch place details",
            };
            AppError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
        })?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(GetPlaceDetailsResponseData {
            address: details.address,
            adr_address: details.adr_address,
        })),
    )
        .into_response())
}

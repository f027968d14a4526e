use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::warn;
use urlencoding::encode;

use super::{
    address_normalizer::{normalize_place_details, NormalizedAddress},
    types::{
        google_autocomplete_response::GoogleAutocompleteResponse,
        google_place_details_response::GooglePlaceDetailsResponse,
        maps_service_error::MapsServiceError,
    },
};

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
const PLACE_DETAILS_FIELDS: &str = "formatted_address,adr_address,address_components,geometry";

#[derive(Clone)]
pub struct MapsServiceConfig {
    pub api_key: Option<String>,
    pub host: String,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct MapsService {
    config: MapsServiceConfig,
    client: reqwest::Client,
}

pub struct AutocompleteSearchInput {
    pub input: String,
}

pub struct AutocompleteSearchOutputPrediction {
    pub main_text: String,
    pub secondary_text: String,
    pub place_id: String,
}

pub struct AutocompleteSearchOutput {
    pub predictions: Vec<AutocompleteSearchOutputPrediction>,
}

pub struct PlaceDetailsInput {
    pub place_id: String,
}

pub struct PlaceDetailsOutput {
    pub address: NormalizedAddress,
    pub adr_address: Option<String>,
}

impl MapsService {
    pub fn new(config: MapsServiceConfig) -> Result<Self, MapsServiceError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(MapsServiceError::ClientBuild)?;

        Ok(Self { config, client })
    }

    fn api_key(&self) -> Result<&str, MapsServiceError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(MapsServiceError::MissingApiKey)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, MapsServiceError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(MapsServiceError::Transport)?;

        if !resp.status().is_success() {
            return Err(MapsServiceError::HttpStatus(resp.status()));
        }

        resp.json::<T>().await.map_err(MapsServiceError::Decode)
    }

    pub async fn get_autocomplete(
        &self,
        input: AutocompleteSearchInput,
    ) -> Result<AutocompleteSearchOutput, MapsServiceError> {
        let api_key = self.api_key()?;

        let url = format!(
            "{}/maps/api/place/autocomplete/json?input={}&types=address&key={}",
            self.config.host,
            encode(&input.input),
            encode(api_key)
        );

        let body = self.fetch_json::<GoogleAutocompleteResponse>(&url).await?;

        if body.status != STATUS_OK && body.status != STATUS_ZERO_RESULTS {
            return Err(MapsServiceError::UpstreamStatus {
                status: body.status,
                message: body.error_message,
            });
        }

        Ok(AutocompleteSearchOutput {
            predictions: body
                .predictions
                .into_iter()
                .enumerate()
                .filter_map(|(index, p)| {
                    let formatting = p.structured_formatting.unwrap_or_default();
                    match (p.place_id, formatting.main_text) {
                        (Some(place_id), Some(main_text)) => {
                            Some(AutocompleteSearchOutputPrediction {
                                main_text,
                                secondary_text: formatting.secondary_text.unwrap_or_default(),
                                place_id,
                            })
                        }
                        _ => {
                            warn!(
                                "Skipping malformed autocomplete prediction #{}: {:?}",
                                index, p.description
                            );
                            None
                        }
                    }
                })
                .collect(),
        })
    }

    pub async fn get_place_details(
        &self,
        input: PlaceDetailsInput,
    ) -> Result<PlaceDetailsOutput, MapsServiceError> {
        let api_key = self.api_key()?;

        let url = format!(
            "{}/maps/api/place/details/json?place_id={}&fields={}&key={}",
            self.config.host,
            encode(&input.place_id),
            PLACE_DETAILS_FIELDS,
            encode(api_key)
        );

        let body = self.fetch_json::<GooglePlaceDetailsResponse>(&url).await?;

        if body.status != STATUS_OK {
            return Err(MapsServiceError::UpstreamStatus {
                status: body.status,
                message: body.error_message,
            });
        }

        let result = body.result.unwrap_or_default();

        Ok(PlaceDetailsOutput {
            address: normalize_place_details(&result),
            adr_address: result.adr_address,
        })
    }
}

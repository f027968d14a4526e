use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Clone)]
pub struct GooglePlaceDetailsAddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Copy)]
pub struct GooglePlaceDetailsLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

#[derive(Serialize, Deserialize, Default, Clone, Copy)]
pub struct GooglePlaceDetailsGeometry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GooglePlaceDetailsLocation>,
}

#[derive(Serialize, Deserialize, Default, Clone)]
pub struct GooglePlaceDetailsResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adr_address: Option<String>,
    #[serde(default)]
    pub address_components: Vec<GooglePlaceDetailsAddressComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GooglePlaceDetailsGeometry>,
}

#[derive(Serialize, Deserialize, Default)]
pub struct GooglePlaceDetailsResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<GooglePlaceDetailsResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

use serde::{Deserialize, Serialize};

use super::types::google_place_details_response::{
    GooglePlaceDetailsAddressComponent, GooglePlaceDetailsResult,
};

const STREET_NUMBER: &str = "street_number";
const ROUTE: &str = "route";
const SUBPREMISE: &str = "subpremise";
const LOCALITY: &str = "locality";
const ADMINISTRATIVE_AREA_LEVEL_1: &str = "administrative_area_level_1";
const ADMINISTRATIVE_AREA_LEVEL_2: &str = "administrative_area_level_2";
const POSTAL_CODE: &str = "postal_code";
const COUNTRY: &str = "country";

/// Fixed-shape postal address the form is populated from.
///
/// Every string field is empty and both coordinates are `0.0` when the upstream
/// place carries no matching data.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAddress {
    pub address1: String,
    pub address2: String,
    pub formatted_address: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
}

/// Long name of the first component tagged with `kind`, or `""`.
pub fn find_address_component<'a>(
    components: &'a [GooglePlaceDetailsAddressComponent],
    kind: &str,
) -> &'a str {
    components
        .iter()
        .find(|c| c.types.iter().any(|t| t == kind))
        .map(|c| c.long_name.as_str())
        .unwrap_or_default()
}

/// Street line built from the unit, house number and street name.
///
/// With a unit the line reads `"{subpremise}/{street_number} {route}"` verbatim;
/// without one, the surrounding whitespace of `"{street_number} {route}"` is trimmed.
pub fn compose_address1(subpremise: &str, street_number: &str, route: &str) -> String {
    if subpremise.is_empty() {
        format!("{} {}", street_number, route).trim().to_string()
    } else {
        format!("{}/{} {}", subpremise, street_number, route)
    }
}

pub fn normalize_place_details(result: &GooglePlaceDetailsResult) -> NormalizedAddress {
    let components = result.address_components.as_slice();

    let address1 = compose_address1(
        find_address_component(components, SUBPREMISE),
        find_address_component(components, STREET_NUMBER),
        find_address_component(components, ROUTE),
    );

    let city = match find_address_component(components, LOCALITY) {
        "" => find_address_component(components, ADMINISTRATIVE_AREA_LEVEL_2),
        locality => locality,
    };

    let location = result.geometry.and_then(|g| g.location);

    NormalizedAddress {
        address1,
        // Never populated from upstream data.
        address2: String::new(),
        formatted_address: result.formatted_address.clone().unwrap_or_default(),
        city: city.to_string(),
        region: find_address_component(components, ADMINISTRATIVE_AREA_LEVEL_1).to_string(),
        postal_code: find_address_component(components, POSTAL_CODE).to_string(),
        country: find_address_component(components, COUNTRY).to_string(),
        lat: location.and_then(|l| l.lat).unwrap_or(0.0),
        lng: location.and_then(|l| l.lng).unwrap_or(0.0),
    }
}

use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_address_autocomplete;
mod get_place_details;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/api/address/autocomplete",
        get(get_address_autocomplete::get_address_autocomplete),
    )
    .route(
        "/api/address/place",
        get(get_place_details::get_place_details),
    )
}

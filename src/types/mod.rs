pub mod api_response;
pub mod app_state;

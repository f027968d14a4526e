use crate::services::maps_client::maps_service::MapsService;

#[derive(Clone)]
pub struct AppState {
    pub maps_service: MapsService,
}

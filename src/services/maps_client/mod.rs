pub mod address_normalizer;
pub mod maps_service;
pub mod types;

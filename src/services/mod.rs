pub mod error;
pub mod api_client;
pub mod label_service;
pub mod auth_service;

pub use error::ApiError;
pub use api_client::ApiClient;
pub use label_service::{
    fetch_bioflex, fetch_destiny, fetch_destiny_label, fetch_quality, CatalogSource,
};

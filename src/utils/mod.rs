pub mod app_error;
pub mod mta_client;

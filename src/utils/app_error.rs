use validator::ValidationErrors;

use super::mta_client::MtaClientError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationErrors),
    #[error(transparent)]
    Client(#[from] MtaClientError),
}

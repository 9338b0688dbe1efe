use tracing::debug;
use urlencoding::encode;

use crate::types::{
    schema_error::SchemaError, vehicle_monitoring_response::VehicleMonitoringResponse,
};

pub const DEFAULT_MTA_HOST: &str = "http://bustime.mta.info";
pub const B32_LINE_REF: &str = "B32";

#[derive(thiserror::Error, Debug)]
pub enum MtaClientError {
    #[error("Request to MTA failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

pub struct MtaClient {
    host: String,
    api_key: String,
    client: reqwest::Client,
}

impl MtaClient {
    pub fn new(host: String, api_key: String) -> Self {
        let request_client = reqwest::Client::new();

        MtaClient {
            host,
            api_key,
            client: request_client,
        }
    }

    pub async fn fetch_vehicle_monitoring(
        &self,
        line_ref: &str,
    ) -> Result<VehicleMonitoringResponse, MtaClientError> {
        debug!(line_ref, host = %self.host, "Fetching vehicle monitoring");

        let body = self
            .client
            .get(&format!(
                "{}/api/siri/vehicle-monitoring.json?key={}&LineRef={}",
                self.host,
                encode(&self.api_key),
                encode(line_ref)
            ))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(VehicleMonitoringResponse::from_json_str(&body)?)
    }
}

/// A response body that does not match the vehicle-monitoring schema.
///
/// `path` points at the first offending element, e.g.
/// `Siri.ServiceDelivery.VehicleMonitoringDelivery[0].ValidUntil`.
#[derive(thiserror::Error, Debug)]
#[error("Invalid response at `{path}`: {message}")]
pub struct SchemaError {
    pub path: String,
    pub message: String,
}

impl From<serde_path_to_error::Error<serde_json::Error>> for SchemaError {
    fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
        SchemaError {
            path: e.path().to_string(),
            message: e.into_inner().to_string(),
        }
    }
}

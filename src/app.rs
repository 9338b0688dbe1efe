use tracing::info;
use validator::Validate;

use crate::{
    services::stop_matcher::{first_vehicle_activity, is_bus_at_stop},
    types::check_stop_args::CheckStopArgs,
    utils::{
        app_error::AppError,
        mta_client::{MtaClient, B32_LINE_REF},
    },
};

pub const AT_STOP_MESSAGE: &str = "The B32 bus is in LIC and moving.";

/// Runs a single fetch-and-check cycle for the B32 line.
pub async fn check_stop(args: &CheckStopArgs) -> Result<bool, AppError> {
    args.validate()?;

    let client = MtaClient::new(args.mta_host.clone(), args.api_key.clone());
    let response = client.fetch_vehicle_monitoring(B32_LINE_REF).await?;

    match first_vehicle_activity(&response) {
        Some(activity) => info!(
            destination = %activity.MonitoredVehicleJourney.DestinationName,
            stop = %activity.MonitoredVehicleJourney.MonitoredCall.StopPointName,
            "First reported vehicle"
        ),
        None => info!("No vehicles reported"),
    }

    Ok(is_bus_at_stop(&response, &args.stop))
}

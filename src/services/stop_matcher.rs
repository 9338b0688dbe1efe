use crate::types::vehicle_monitoring_response::{VehicleActivity, VehicleMonitoringResponse};

/// Destination shown by southbound B32 trips.
pub const SOUTHBOUND_DESTINATION: &str = "WILLIAMSBURG BRIDGE PLAZA";

/// The first vehicle reported by the first delivery, if any.
pub fn first_vehicle_activity(response: &VehicleMonitoringResponse) -> Option<&VehicleActivity> {
    response
        .Siri
        .ServiceDelivery
        .VehicleMonitoringDelivery
        .first()
        .and_then(|d| d.VehicleActivity.as_ref())
        .and_then(|a| a.first())
}

/// Whether a southbound bus currently has `stop` as its monitored call.
///
/// Only the first reported vehicle is looked at. If it is not a southbound trip the answer is
/// `false`, even when a later vehicle in the list would match. Names are compared exactly.
pub fn is_bus_at_stop(response: &VehicleMonitoringResponse, stop: &str) -> bool {
    match first_vehicle_activity(response) {
        Some(activity) => {
            let journey = &activity.MonitoredVehicleJourney;
            journey.DestinationName == SOUTHBOUND_DESTINATION
                && journey.MonitoredCall.StopPointName == stop
        }
        None => false,
    }
}

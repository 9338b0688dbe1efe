#![allow(non_snake_case)]
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::schema_error::SchemaError;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct VehicleLocation {
    pub Latitude: f64,
    pub Longitude: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Capacities {
    pub EstimatedPassengerCapacity: i64,
    pub EstimatedPassengerCount: i64,
    /// e.g. "manySeatsAvailable"
    pub EstimatedPassengerLoadFactor: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Distances {
    pub CallDistanceAlongRoute: f64,
    pub DistanceFromCall: f64,
    /// Rider-facing label such as "approaching" or "< 1 stop away"
    pub PresentableDistance: String,
    pub StopsFromCall: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct VehicleFeatures {
    pub StrollerVehicle: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Extensions {
    pub Capacities: Capacities,
    pub Distances: Distances,
    pub VehicleFeatures: VehicleFeatures,
}

/// The stop the vehicle is currently approaching or servicing.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MonitoredCall {
    pub AimedArrivalTime: DateTime<FixedOffset>,
    pub AimedDepartureTime: DateTime<FixedOffset>,
    pub ExpectedArrivalTime: DateTime<FixedOffset>,
    pub ExpectedDepartureTime: DateTime<FixedOffset>,
    pub Extensions: Extensions,
    pub StopPointName: String,
    pub StopPointRef: String,
    /// Which occurrence of this stop on the current trip, starting at 1
    pub VisitNumber: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FramedVehicleJourneyRef {
    pub DataFrameRef: String,
    pub DatedVehicleJourneyRef: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MonitoredVehicleJourney {
    pub Bearing: f64,
    pub BlockRef: String,
    pub DestinationName: String,
    pub DirectionRef: String,
    pub FramedVehicleJourneyRef: FramedVehicleJourneyRef,
    pub JourneyPatternRef: String,
    pub LineRef: String,
    pub Monitored: bool,
    pub MonitoredCall: MonitoredCall,
    pub Occupancy: String,
    /// Always an empty object in the vehicle-monitoring feed unless onward calls are requested
    pub OnwardCalls: Map<String, Value>,
    pub OperatorRef: String,
    pub OriginRef: String,
    pub ProgressRate: String,
    pub PublishedLineName: String,
    pub VehicleLocation: VehicleLocation,
    pub VehicleRef: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct VehicleActivity {
    pub MonitoredVehicleJourney: MonitoredVehicleJourney,
    pub RecordedAtTime: DateTime<FixedOffset>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct VehicleMonitoringDelivery {
    pub ResponseTimestamp: DateTime<FixedOffset>,
    pub ValidUntil: DateTime<FixedOffset>,
    /// Missing when no vehicles are currently reported on the line
    pub VehicleActivity: Option<Vec<VehicleActivity>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ServiceDelivery {
    pub ResponseTimestamp: DateTime<FixedOffset>,
    pub VehicleMonitoringDelivery: Vec<VehicleMonitoringDelivery>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Siri {
    pub ServiceDelivery: ServiceDelivery,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct VehicleMonitoringResponse {
    pub Siri: Siri,
}

impl VehicleMonitoringResponse {
    /// Validates a raw response body. Unknown fields are ignored, every other field is
    /// required except `VehicleActivity`.
    pub fn from_json_str(body: &str) -> Result<Self, SchemaError> {
        let deserializer = &mut serde_json::Deserializer::from_str(body);
        serde_path_to_error::deserialize(deserializer).map_err(SchemaError::from)
    }

    // Only the tests start from an already parsed value.
    #[allow(dead_code)]
    pub fn from_json_value(value: Value) -> Result<Self, SchemaError> {
        serde_path_to_error::deserialize(value).map_err(SchemaError::from)
    }
}

#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn monitored_vehicle_journey(destination: &str, stop_point_name: &str) -> Value {
        json!({
            "Bearing": 185.48943,
            "BlockRef": "MTA NYCT_GA_C5-Saturday_A_GA_24300_B32-102",
            "DestinationName": destination,
            "DirectionRef": "1",
            "FramedVehicleJourneyRef": {
                "DataFrameRef": "2025-07-12",
                "DatedVehicleJourneyRef": "MTA NYCT_GA_C5-Saturday-069000_B32_102"
            },
            "JourneyPatternRef": "MTA_B320048",
            "LineRef": "MTA NYCT_B32",
            "Monitored": true,
            "MonitoredCall": {
                "AimedArrivalTime": "2025-07-12T11:38:22.000-04:00",
                "AimedDepartureTime": "2025-07-12T11:38:22.000-04:00",
                "ExpectedArrivalTime": "2025-07-12T11:34:38.401-04:00",
                "ExpectedDepartureTime": "2025-07-12T11:34:38.401-04:00",
                "Extensions": {
                    "Capacities": {
                        "EstimatedPassengerCapacity": 80,
                        "EstimatedPassengerCount": 10,
                        "EstimatedPassengerLoadFactor": "manySeatsAvailable"
                    },
                    "Distances": {
                        "CallDistanceAlongRoute": 2209.67,
                        "DistanceFromCall": 91.37,
                        "PresentableDistance": "approaching",
                        "StopsFromCall": 0
                    },
                    "VehicleFeatures": {
                        "StrollerVehicle": false
                    }
                },
                "StopPointName": stop_point_name,
                "StopPointRef": "MTA_308730",
                "VisitNumber": 1
            },
            "Occupancy": "seatsAvailable",
            "OnwardCalls": {},
            "OperatorRef": "MTA NYCT",
            "OriginRef": "MTA_505252",
            "ProgressRate": "normalProgress",
            "PublishedLineName": "B32",
            "VehicleLocation": {
                "Latitude": 40.73414,
                "Longitude": -73.958003
            },
            "VehicleRef": "MTA NYCT_5007"
        })
    }

    pub fn vehicle_activity(destination: &str, stop_point_name: &str) -> Value {
        json!({
            "MonitoredVehicleJourney": monitored_vehicle_journey(destination, stop_point_name),
            "RecordedAtTime": "2025-07-12T11:34:17.668-04:00"
        })
    }

    /// Wraps the given activities in a single delivery. `None` leaves `VehicleActivity` out.
    pub fn response_with_activities(activities: Option<Vec<Value>>) -> Value {
        let mut delivery = json!({
            "ResponseTimestamp": "2025-07-12T11:34:33.366-04:00",
            "ValidUntil": "2025-07-12T11:35:33.366-04:00"
        });
        if let Some(activities) = activities {
            delivery["VehicleActivity"] = Value::Array(activities);
        }

        json!({
            "Siri": {
                "ServiceDelivery": {
                    "ResponseTimestamp": "2025-07-12T11:34:33.366-04:00",
                    "VehicleMonitoringDelivery": [delivery]
                }
            }
        })
    }

    /// A southbound bus at Franklin St followed by a northbound one at Kent Av.
    pub fn b32_response() -> Value {
        response_with_activities(Some(vec![
            vehicle_activity("WILLIAMSBURG BRIDGE PLAZA", "FRANKLIN ST/GREEN ST"),
            vehicle_activity("LONG ISLAND CITY 44DR - 21 ST", "KENT AV/METROPOLITAN AV"),
        ]))
    }
}

pub mod check_stop_args;
pub mod schema_error;
pub mod vehicle_monitoring_response;

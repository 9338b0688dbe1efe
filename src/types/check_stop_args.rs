use clap::Parser;
use validator::Validate;

use crate::utils::mta_client::DEFAULT_MTA_HOST;

/// Check if the B32 bus is at a specific stop.
#[derive(Parser, Validate, Debug)]
#[command(version, about)]
pub struct CheckStopArgs {
    /// The name of the bus stop to check, e.g. "FRANKLIN ST/GREEN ST"
    #[arg(long)]
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub stop: String,

    /// MTA BusTime API key
    #[arg(long = "api_key", visible_alias = "api-key")]
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub api_key: String,

    #[arg(long, default_value = DEFAULT_MTA_HOST, hide = true)]
    pub mta_host: String,
}

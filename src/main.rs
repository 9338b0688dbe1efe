mod app;
mod services;
mod types;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use crate::types::check_stop_args::CheckStopArgs;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = CheckStopArgs::parse();
    info!(stop = %args.stop, "Checking for southbound B32");

    // vehicle monitoring: {HOST}/api/siri/vehicle-monitoring.json?key={KEY}&LineRef=B32
    match app::check_stop(&args).await {
        Ok(true) => println!("{}", app::AT_STOP_MESSAGE),
        Ok(false) => info!("Bus is not at {}", args.stop),
        Err(e) => {
            error!("Failed to check stop: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

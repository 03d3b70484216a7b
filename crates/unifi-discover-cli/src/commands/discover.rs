//! Discover command implementation.

use std::time::Duration;

use unifi_discover_core::discovery::{discover, DiscoveryOptions};

use crate::cli::DiscoverArgs;
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the discover command
pub async fn run_discover(args: DiscoverArgs, json: bool) -> Result<(), CliError> {
    let formatter = get_formatter(json);

    let options = DiscoveryOptions {
        port: args.port,
        timeout: Duration::from_secs(args.timeout),
        broadcast_addr: args.broadcast,
    };

    if !json {
        println!("Discovering devices for {} seconds...", args.timeout);
    }

    let reports = discover(options).await?;

    println!("{}", formatter.format_devices(&reports));

    if reports.is_empty() {
        return Err(CliError::NoDevicesFound);
    }

    Ok(())
}

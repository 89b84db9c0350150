use std::time::Duration;

use crate::adb::AdbRunner;
use crate::cli::{Cli, screen_arg};
use crate::config::Config;
use crate::consts::{DEFAULT_ADB, DEFAULT_SETTLE_MS};
use crate::error::AppError;
use crate::screen::{WakeOptions, wake_and_unlock};

/// Print the run outcome as a single JSON object
fn print_json(serial: Option<&str>, state: &str, wake_sent: bool) {
    let json = serde_json::json!({
        "serial": serial,
        "screen_state": state,
        "wake_sent": wake_sent,
        "keyguard_dismissed": true,
    });
    println!("{json}");
}

pub(crate) fn run(cli: Cli) -> Result<(), AppError> {
    let config = if cli.json {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    // --serial beats harness `screen=` tokens, which beat the config default
    let serial = cli
        .serial
        .clone()
        .or_else(|| screen_arg(&cli.args))
        .or(config.serial);

    let adb_path = cli.adb.clone().unwrap_or_else(|| DEFAULT_ADB.to_string());
    let settle = Duration::from_millis(cli.settle_ms.unwrap_or(DEFAULT_SETTLE_MS));

    let adb = AdbRunner::new(adb_path, serial, cli.debug);
    let opts = WakeOptions {
        settle,
        announce: !cli.json,
    };

    let outcome = wake_and_unlock(&adb, &opts)?;

    if cli.json {
        print_json(adb.serial(), outcome.state.as_str(), outcome.wake_sent);
    } else {
        println!("Keyguard dismissed.");
    }

    Ok(())
}

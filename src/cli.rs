//! CLI argument definitions
//!
//! Accepts the harness's `KEY=VALUE` tokens as positionals and layers the
//! flag/config surface on top.

use clap::Parser;

use crate::config::Config;
use crate::consts::SCREEN_ARG_PREFIX;

#[derive(Parser)]
#[command(name = "wakescreen")]
#[command(about = "Wake an Android device screen and dismiss its keyguard via adb", version)]
pub(crate) struct Cli {
    /// Harness arguments; `screen=<serial>` selects the target device, everything else is ignored
    #[arg(value_name = "KEY=VALUE")]
    pub(crate) args: Vec<String>,

    /// Device serial to target (overrides any screen= argument)
    #[arg(short, long, value_name = "SERIAL")]
    pub(crate) serial: Option<String>,

    /// adb executable to invoke
    #[arg(long, value_name = "PATH")]
    pub(crate) adb: Option<String>,

    /// Pause after the wake and unlock commands, in milliseconds
    #[arg(long, value_name = "MS")]
    pub(crate) settle_ms: Option<u64>,

    /// Output the run outcome as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Print each adb invocation before running it
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    ///
    /// The serial is deliberately not merged here: the --serial flag must
    /// beat `screen=` tokens, which in turn beat the config default, so
    /// that resolution happens in one place in `app::run`.
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.adb.is_none() {
            self.adb = config.adb.clone();
        }
        if self.settle_ms.is_none() {
            self.settle_ms = config.settle_ms;
        }
        self
    }
}

/// Scan harness arguments for `screen=<serial>`.
///
/// The last match wins, and a bare `screen=` with nothing after the prefix
/// does not count as a match.
pub(crate) fn screen_arg(args: &[String]) -> Option<String> {
    args.iter()
        .filter_map(|arg| arg.strip_prefix(SCREEN_ARG_PREFIX))
        .filter(|serial| !serial.is_empty())
        .last()
        .map(str::to_string)
}

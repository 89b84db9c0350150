/// Harness argument that selects the target device: "screen=<serial>"
pub(crate) const SCREEN_ARG_PREFIX: &str = "screen=";

/// Display power state field in `dumpsys display` output: "mScreenState=OFF"
pub(crate) const SCREEN_STATE_KEY: &str = "mScreenState";

/// Key event that powers the display back on
pub(crate) const POWER_KEYEVENT: &str = "POWER";

/// Executable invoked when neither --adb nor the config names one
pub(crate) const DEFAULT_ADB: &str = "adb";

/// Pause after the wake and unlock commands, in milliseconds
pub(crate) const DEFAULT_SETTLE_MS: u64 = 500;

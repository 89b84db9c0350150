//! Display power state probe and the wake/unlock sequence.

use std::thread;
use std::time::Duration;

use crate::adb::AdbRunner;
use crate::consts::{POWER_KEYEVENT, SCREEN_STATE_KEY};
use crate::error::AppError;

/// Power state token from the `mScreenState=` line of `dumpsys display`,
/// e.g. `ON`, `OFF`, `DOZE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScreenState(String);

impl ScreenState {
    /// Extract the state token from `dumpsys display` output.
    ///
    /// Looks for `mScreenState=<TOKEN>` and takes the token on the last
    /// matching line (multi-display dumps repeat the field). The token is
    /// trimmed, which also strips the `\r` that adb's pty leaves on line
    /// ends. Output without the marker is an error, not an implicit
    /// "screen is on".
    pub(crate) fn parse(dumpsys: &str) -> Result<Self, AppError> {
        dumpsys
            .lines()
            .filter_map(|line| {
                let (_, rest) = line.split_once(SCREEN_STATE_KEY)?;
                rest.strip_prefix('=')
            })
            .last()
            .map(|token| ScreenState(token.trim().to_string()))
            .ok_or(AppError::ScreenStateMissing)
    }

    /// Whether the display needs a wake event. Only `OFF`-family tokens
    /// qualify; dozing counts as on, since a POWER event would then turn
    /// the panel off instead.
    pub(crate) fn is_off(&self) -> bool {
        self.0.contains("OFF")
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

/// Knobs for the wake sequence.
pub(crate) struct WakeOptions {
    /// Pause inserted after the wake and unlock commands; slower panels
    /// drop the next command without it.
    pub(crate) settle: Duration,
    /// Print progress lines to stdout (disabled in JSON mode).
    pub(crate) announce: bool,
}

/// What a completed run did, for reporting.
#[derive(Debug)]
pub(crate) struct WakeOutcome {
    pub(crate) state: ScreenState,
    pub(crate) wake_sent: bool,
}

/// Power up the screen if needed, then dismiss the keyguard.
///
/// The keyguard dismissal runs on every successful probe, whatever the
/// state; the POWER key event only when the panel reports off. Any failed
/// invocation or unparseable probe stops the sequence there.
pub(crate) fn wake_and_unlock(
    adb: &AdbRunner,
    opts: &WakeOptions,
) -> Result<WakeOutcome, AppError> {
    let dump = adb.shell(&["dumpsys", "display"])?;
    let state = ScreenState::parse(&dump)?;

    let wake_sent = state.is_off();
    if wake_sent {
        if opts.announce {
            println!("Screen OFF. Turning ON.");
        }
        adb.shell(&["input", "keyevent", POWER_KEYEVENT])?;
        thread::sleep(opts.settle);
    }

    adb.wait_shell(&["wm", "dismiss-keyguard"])?;
    thread::sleep(opts.settle);

    Ok(WakeOutcome { state, wake_sent })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMPSYS_ON: &str = "\
DISPLAY MANAGER (dumpsys display)
  mOnlyCore=false
  mSafeMode=false
Display Power Controller:
  mScreenBrightnessDozeConfig=17
  mPendingRequestLocked=policy=BRIGHT
Display Power Controller Thread State:
  mPowerRequest=policy=BRIGHT
  mScreenState=ON
  mScreenBrightness=102
";

    #[test]
    fn parse_bare_state_line() {
        let state = ScreenState::parse("  mScreenState=OFF").unwrap();
        assert_eq!(state.as_str(), "OFF");
        assert!(state.is_off());
    }

    #[test]
    fn parse_full_dump() {
        let state = ScreenState::parse(DUMPSYS_ON).unwrap();
        assert_eq!(state.as_str(), "ON");
        assert!(!state.is_off());
    }

    #[test]
    fn parse_trims_adb_crlf() {
        let state = ScreenState::parse("  mScreenState=OFF\r\n").unwrap();
        assert_eq!(state.as_str(), "OFF");
    }

    #[test]
    fn parse_last_line_wins() {
        let dump = "  mScreenState=OFF\n  mScreenState=ON\n";
        let state = ScreenState::parse(dump).unwrap();
        assert_eq!(state.as_str(), "ON");
    }

    #[test]
    fn parse_missing_marker_is_an_error() {
        let dump = "Display Power Controller:\n  mPowerRequest=policy=BRIGHT\n";
        assert!(matches!(
            ScreenState::parse(dump),
            Err(AppError::ScreenStateMissing)
        ));
        assert!(matches!(
            ScreenState::parse(""),
            Err(AppError::ScreenStateMissing)
        ));
    }

    #[test]
    fn parse_rejects_longer_field_names() {
        // mScreenStateTimestamp must not satisfy the mScreenState= match
        let dump = "  mScreenStateTimestamp=1723791021\n";
        assert!(matches!(
            ScreenState::parse(dump),
            Err(AppError::ScreenStateMissing)
        ));
    }

    #[test]
    fn doze_is_not_off() {
        assert!(!ScreenState::parse("mScreenState=DOZE").unwrap().is_off());
        assert!(
            !ScreenState::parse("mScreenState=DOZE_SUSPEND")
                .unwrap()
                .is_off()
        );
    }

    #[test]
    fn off_family_tokens_are_off() {
        assert!(ScreenState::parse("mScreenState=OFF").unwrap().is_off());
        assert!(
            ScreenState::parse("mScreenState=OFF_SUSPEND")
                .unwrap()
                .is_off()
        );
    }
}

//! adb invocation layer
//!
//! Builds the `adb [-s SERIAL] [wait-for-device] shell ...` command lines
//! and runs them, surfacing exit status and stderr instead of firing and
//! forgetting.

use std::process::Command;

use crate::error::AdbError;

/// Runs adb commands against one (optional) device serial.
pub(crate) struct AdbRunner {
    adb: String,
    serial: Option<String>,
    debug: bool,
}

impl AdbRunner {
    pub(crate) fn new(adb: String, serial: Option<String>, debug: bool) -> Self {
        Self { adb, serial, debug }
    }

    pub(crate) fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    /// Argument vector after the executable. With no serial the `-s`
    /// qualifier is omitted entirely and adb's own device selection applies.
    fn build_args(&self, wait_for_device: bool, shell_args: &[&str]) -> Vec<String> {
        let mut argv = Vec::new();
        if let Some(serial) = &self.serial {
            argv.push("-s".to_string());
            argv.push(serial.clone());
        }
        if wait_for_device {
            argv.push("wait-for-device".to_string());
        }
        argv.push("shell".to_string());
        argv.extend(shell_args.iter().map(|s| s.to_string()));
        argv
    }

    /// Run `adb [-s SERIAL] shell <args..>` and return its stdout.
    pub(crate) fn shell(&self, shell_args: &[&str]) -> Result<String, AdbError> {
        self.run(self.build_args(false, shell_args))
    }

    /// Run `adb [-s SERIAL] wait-for-device shell <args..>` and return its
    /// stdout. Used for the keyguard dismissal, which must not race a
    /// device that is still coming up after the wake event.
    pub(crate) fn wait_shell(&self, shell_args: &[&str]) -> Result<String, AdbError> {
        self.run(self.build_args(true, shell_args))
    }

    fn run(&self, argv: Vec<String>) -> Result<String, AdbError> {
        if self.debug {
            eprintln!("Running: {} {}", self.adb, argv.join(" "));
        }

        let output = Command::new(&self.adb).args(&argv).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AdbError::NotFound {
                    path: self.adb.clone(),
                }
            } else {
                AdbError::Spawn(e)
            }
        })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(AdbError::Utf8)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(AdbError::CommandFailed {
                args: argv.join(" "),
                status: output.status,
                stderr: stderr.trim().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_with_serial() {
        let adb = AdbRunner::new("adb".to_string(), Some("R58M".to_string()), false);
        assert_eq!(
            adb.build_args(false, &["input", "keyevent", "POWER"]),
            ["-s", "R58M", "shell", "input", "keyevent", "POWER"]
        );
    }

    #[test]
    fn args_without_serial() {
        let adb = AdbRunner::new("adb".to_string(), None, false);
        assert_eq!(
            adb.build_args(false, &["dumpsys", "display"]),
            ["shell", "dumpsys", "display"]
        );
    }

    #[test]
    fn wait_for_device_precedes_shell() {
        let adb = AdbRunner::new("adb".to_string(), Some("R58M".to_string()), false);
        assert_eq!(
            adb.build_args(true, &["wm", "dismiss-keyguard"]),
            ["-s", "R58M", "wait-for-device", "shell", "wm", "dismiss-keyguard"]
        );
    }

    #[test]
    fn missing_executable_is_not_found() {
        let adb = AdbRunner::new("/nonexistent/adb-for-tests".to_string(), None, false);
        assert!(matches!(
            adb.shell(&["dumpsys", "display"]),
            Err(AdbError::NotFound { .. })
        ));
    }
}

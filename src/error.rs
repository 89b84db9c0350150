use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("no mScreenState line in `dumpsys display` output; cannot tell whether the screen is off")]
    ScreenStateMissing,

    #[error("{0}")]
    Adb(#[from] AdbError),
}

#[derive(Debug, Error)]
pub(crate) enum AdbError {
    #[error("{path} not found. Install Android platform-tools or point --adb at the executable.")]
    NotFound { path: String },

    #[error("Failed to run adb: {0}")]
    Spawn(std::io::Error),

    #[error("Invalid UTF-8 from adb: {0}")]
    Utf8(std::string::FromUtf8Error),

    #[error("`adb {args}` failed ({status}): {stderr}")]
    CommandFailed {
        args: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// adb executable to invoke
    #[serde(default)]
    pub(crate) adb: Option<String>,
    /// Device serial used when no `screen=` argument or --serial is given
    #[serde(default)]
    pub(crate) serial: Option<String>,
    /// Pause after the wake and unlock commands, in milliseconds
    #[serde(default)]
    pub(crate) settle_ms: Option<u64>,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        // Try config locations in order of priority
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/wakescreen/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("wakescreen").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/wakescreen/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("wakescreen").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.wakescreen.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".wakescreen.toml"));
        }

        paths
    }
}

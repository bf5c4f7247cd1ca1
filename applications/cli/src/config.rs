/// Player configuration
use crate::error::{CliError, Result};
use podcastr_client::ClientConfig;
use podcastr_playback::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "podcastr.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_player")]
    pub player: PlayerSettings,

    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Episodes fetched for `list` and `listen`
    #[serde(default = "default_limit")]
    pub limit: usize,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSettings {
    #[serde(default)]
    pub looping: bool,

    #[serde(default)]
    pub shuffling: bool,

    #[serde(default)]
    pub shuffle_seed: Option<u64>,

    /// How often device reports are applied, in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LogSettings {
    /// `tracing` filter directive; `RUST_LOG` takes precedence
    #[serde(default)]
    pub filter: Option<String>,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given. Without it, `podcastr.toml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (e.g. PODCASTR_API__BASE_URL)
        settings = settings.add_source(env);

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(CliError::Config(
                "API base URL is required (set PODCASTR_API__BASE_URL)".to_string(),
            ));
        }

        if self.api.limit == 0 {
            return Err(CliError::Config("api.limit must be at least 1".to_string()));
        }

        if self.player.tick_ms == 0 {
            return Err(CliError::Config(
                "player.tick_ms must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.base_url.clone())
            .with_timeout(Duration::from_secs(self.api.timeout_secs))
    }

    pub fn player_config(&self) -> PlayerConfig {
        PlayerConfig {
            looping: self.player.looping,
            shuffling: self.player.shuffling,
            shuffle_seed: self.player.shuffle_seed,
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.player.tick_ms)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("PODCASTR")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        limit: default_limit(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_limit() -> usize {
    12
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_player() -> PlayerSettings {
    PlayerSettings {
        looping: false,
        shuffling: false,
        shuffle_seed: None,
        tick_ms: default_tick_ms(),
    }
}

fn default_tick_ms() -> u64 {
    250
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            player: default_player(),
            log: LogSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        environment().source(Some(map))
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.limit, 12);
        assert_eq!(config.tick(), Duration::from_millis(250));
        assert_eq!(config.player_config(), PlayerConfig::default());
    }

    #[test]
    fn file_values_are_read() {
        let file = write_config(
            r#"
            [api]
            base_url = "https://podcasts.example.com"
            limit = 3

            [player]
            looping = true
            shuffle_seed = 42
            "#,
        );

        let config = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap();

        assert_eq!(config.api.base_url, "https://podcasts.example.com");
        assert_eq!(config.api.limit, 3);
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.player.looping);
        assert_eq!(config.player_config().shuffle_seed, Some(42));
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_config(
            r#"
            [api]
            base_url = "https://file.example.com"
            "#,
        );

        let config = AppConfig::load_with_env(
            Some(file.path()),
            env(&[
                ("PODCASTR_API__BASE_URL", "https://env.example.com"),
                ("PODCASTR_PLAYER__TICK_MS", "100"),
            ]),
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://env.example.com");
        assert_eq!(config.player.tick_ms, 100);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result =
            AppConfig::load_with_env(Some(Path::new("/nonexistent/podcastr.toml")), env(&[]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.api.base_url = "  ".into();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.api.limit = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.player.tick_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn invalid_file_values_fail_validation_on_load() {
        let file = write_config(
            r#"
            [player]
            tick_ms = 0
            "#,
        );

        let result = AppConfig::load_with_env(Some(file.path()), env(&[]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}

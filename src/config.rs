use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "chips.toml";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub generation: GenerationConfig,
    pub dataset: DatasetConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub environment: String,
    pub service: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Artificial latency of the design generation endpoint.
    pub delay_ms: u64,
}

/// Where projects are loaded from. The database wins over the CSV file, and
/// the built-in dataset is used when neither is set.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    pub csv: Option<PathBuf>,
    pub database_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            environment: "development".to_owned(),
            service: "gTek Humanitarian CHIPS".to_owned(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

impl GenerationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        toml::from_str(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    /// Load `file_name` when given, otherwise `chips.toml` if it exists,
    /// otherwise the defaults.
    pub fn discover(file_name: Option<&Path>) -> Result<Config> {
        match file_name {
            Some(file_name) => Self::load(file_name),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Config::default()),
        }
    }

    /// Override settings from `CHIPS_ENV` and `DATABASE_URL`.
    pub fn with_env(self) -> Config {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Config {
        if let Some(environment) = lookup("CHIPS_ENV").filter(|e| !e.is_empty()) {
            self.server.environment = environment;
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            self.dataset.database_url = Some(url);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.server.bind.port(), 3000);
        assert_eq!(config.server.environment, "development");
        assert_eq!(config.generation.delay(), Duration::from_secs(1));
        assert!(config.dataset.csv.is_none());
        assert!(config.dataset.database_url.is_none());
    }

    #[test]
    fn load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nbind = \"127.0.0.1:8080\"\n\n[generation]\ndelay_ms = 0\n\n[dataset]\ncsv = \"data/projects.csv\""
        )
        .unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.bind, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.server.service, "gTek Humanitarian CHIPS");
        assert_eq!(config.generation.delay_ms, 0);
        assert_eq!(config.dataset.csv, Some(PathBuf::from("data/projects.csv")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 80").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(Config::discover(Some(Path::new("/nonexistent/chips.toml"))).is_err());
    }

    #[test]
    fn environment_overrides() {
        let config = Config::default().with_overrides(|key| match key {
            "CHIPS_ENV" => Some("production".to_owned()),
            "DATABASE_URL" => Some("mysql://chips@localhost/chips".to_owned()),
            _ => None,
        });
        assert_eq!(config.server.environment, "production");
        assert_eq!(
            config.dataset.database_url.as_deref(),
            Some("mysql://chips@localhost/chips")
        );
        let config = Config::default().with_overrides(|_| Some(String::new()));
        assert_eq!(config.server.environment, "development");
        assert!(config.dataset.database_url.is_none());
    }
}

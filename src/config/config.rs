use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub http: HttpConfig,
    pub download: DownloadConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub dir: String,
    pub results_file: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadConfig {
    /// Downloads smaller than this are reported as probable thumbnails.
    pub min_expected_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            output: OutputConfig {
                dir: "public/assets/products/shirts".to_string(),
                results_file: "products.json".to_string(),
            },
            http: HttpConfig {
                user_agent: DEFAULT_USER_AGENT.to_string(),
                timeout_secs: 10,
                delay_min_ms: 0,
                delay_max_ms: 0,
            },
            download: DownloadConfig {
                min_expected_bytes: 50_000,
            },
        }
    }
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from("Settings.toml")
}

/// Layers the built-in defaults, an optional TOML file and `APP_*` environment
/// variables (`APP_OUTPUT__DIR`, `APP_HTTP__TIMEOUT_SECS`, ...).
pub fn load_config_from(file_path: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(Config::try_from(&AppConfig::default())?)
        .add_source(File::new(file_path, FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix("APP").prefix_separator("_").separator("__"))
        .build()?;

    settings.try_deserialize::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = load_config_from(path.to_str().unwrap()).unwrap();

        assert_eq!(config.output.results_file, "products.json");
        assert_eq!(config.http.timeout_secs, 10);
        assert_eq!(config.http.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.download.min_expected_bytes, 50_000);
    }

    #[test]
    fn file_overrides_only_the_keys_it_sets() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\ndir = \"/tmp/shirts\"\n\n[http]\ntimeout_secs = 3").unwrap();

        let config = load_config_from(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.output.dir, "/tmp/shirts");
        assert_eq!(config.output.results_file, "products.json");
        assert_eq!(config.http.timeout_secs, 3);
        assert_eq!(config.http.delay_max_ms, 0);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output\ndir = ").unwrap();

        assert!(load_config_from(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn environment_overrides_nested_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        std::env::set_var("APP_HTTP__DELAY_MIN_MS", "250");
        let config = load_config_from(path.to_str().unwrap());
        std::env::remove_var("APP_HTTP__DELAY_MIN_MS");

        let config = config.unwrap();
        assert_eq!(config.http.delay_min_ms, 250);
        assert_eq!(config.http.timeout_secs, 10);
    }
}

use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog admin API, e.g. "http://localhost:4000/api"
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    15
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[catalog]
base_url = "http://localhost:4000/api"
timeout_secs = 15
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// The CATALOG_API_BASE_URL environment variable overrides the base URL
/// regardless of where the file came from.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_config_file()?;

    if let Ok(base_url) = std::env::var("CATALOG_API_BASE_URL") {
        if !base_url.trim().is_empty() {
            tracing::info!("Catalog base URL overridden from environment");
            config.catalog.base_url = base_url.trim().to_string();
        }
    }

    Ok(config)
}

fn load_config_file() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return read_config(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.catalog.base_url, "http://localhost:4000/api");
        assert_eq!(config.catalog.timeout_secs, 15);
    }

    #[test]
    fn test_timeout_defaults_when_absent() {
        let config: Config = toml::from_str(
            r#"
            [catalog]
            base_url = "https://appfbo-backend.onrender.com/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.timeout_secs, 15);
    }
}

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                path: get_default_db_path(),
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            },
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `explicit_path` or the default config file,
    /// writing a default file first if none exists. `BOARD_*` environment
    /// variables override file values, e.g. `BOARD_DATABASE__PATH`.
    pub fn load(explicit_path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = explicit_path
            .map(Path::to_path_buf)
            .unwrap_or_else(get_config_path);

        if !config_path.exists() {
            write_default_config(&config_path)?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .add_source(Environment::with_prefix("BOARD").separator("__"))
            .build()?;

        let mut config: ApiConfig = builder.try_deserialize()?;
        config.database.path = expand_tilde(&config.database.path);

        Ok((config, config_path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn write_default_config(config_path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Message(format!("Failed to create config directory: {e}"))
        })?;
    }

    let default_config = toml::to_string(&ApiConfig::default())
        .map_err(|e| ConfigError::Message(format!("Failed to serialize default config: {e}")))?;

    std::fs::write(config_path, default_config)
        .map_err(|e| ConfigError::Message(format!("Failed to write default config: {e}")))
}

fn expand_tilde(path: &Path) -> PathBuf {
    if !path.starts_with("~") {
        return path.to_path_buf();
    }

    match home::home_dir() {
        Some(home) => {
            let path_str = path.to_string_lossy();
            PathBuf::from(path_str.replacen('~', &home.to_string_lossy(), 1))
        }
        None => path.to_path_buf(),
    }
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("message-board/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

fn get_default_db_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join("message-board/board.db")
    } else {
        PathBuf::from("board.db")
    }
}

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub bank_feed: BankFeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Каталог собранного фронтенда (trunk dist)
    pub static_dir: String,
}

/// Настройки имитации банковской выписки
#[derive(Debug, Deserialize, Clone)]
pub struct BankFeedConfig {
    /// Зерно генератора: одинаковое зерно — одинаковая выписка
    pub seed: u64,
    /// Максимум операций за день по одному счёту
    pub max_transactions_per_day: u32,
    /// Глубина выписки (дней) для счёта, который ещё не синхронизировался
    pub lookback_days: u32,
    /// Банки, которые отвечают ошибкой
    #[serde(default)]
    pub unavailable_banks: Vec<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[bank_feed]
seed = 20240101
max_transactions_per_day = 3
lookback_days = 14
unavailable_banks = []
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return load_from_path(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn load_from_path(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.bank_feed.lookback_days == 0 {
        anyhow::bail!("bank_feed.lookback_days must be greater than 0");
    }
    Ok(config)
}

/// Каталог статики: относительный путь считается от каталога исполняемого файла
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.bank_feed.lookback_days, 14);
        assert!(config.bank_feed.unavailable_banks.is_empty());
    }

    #[test]
    fn test_unavailable_banks_optional() {
        let config = parse_config(
            r#"
            [server]
            port = 8080
            static_dir = "/srv/app"

            [bank_feed]
            seed = 1
            max_transactions_per_day = 1
            lookback_days = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.bank_feed.unavailable_banks.is_empty());
        assert_eq!(get_static_dir(&config), PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_zero_lookback_rejected() {
        let broken = DEFAULT_CONFIG.replace("lookback_days = 14", "lookback_days = 0");
        assert!(parse_config(&broken).is_err());
    }
}

//! Настройки списка заявок.
//!
//! Файл `grid.toml` встраивается в бинарник при сборке и разбирается один раз
//! при первом обращении. Отсутствующие ключи берутся из значений по умолчанию.

use anyhow::Context;
use contracts::shared::list_view::DEFAULT_PAGE_SIZE;
use once_cell::sync::OnceCell;
use serde::Deserialize;

const GRID_CONFIG: &str = include_str!("../../grid.toml");

static CONFIG: OnceCell<GridConfig> = OnceCell::new();

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub search_debounce_ms: u32,
    pub log_level: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, 50, 100],
            search_debounce_ms: 400,
            log_level: "debug".to_string(),
        }
    }
}

impl GridConfig {
    /// Уровень логирования; нераспознанное значение даёт `Debug`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }

    fn normalized(mut self) -> Self {
        if self.page_size == 0 {
            log::warn!("grid.toml: page_size = 0, using {}", DEFAULT_PAGE_SIZE);
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self.page_size_options.retain(|&size| size > 0);
        if !self.page_size_options.contains(&self.page_size) {
            self.page_size_options.push(self.page_size);
        }
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        self
    }
}

/// Разбор конфигурации из TOML
pub fn parse_config(contents: &str) -> anyhow::Result<GridConfig> {
    let config: GridConfig = toml::from_str(contents).context("parsing grid.toml")?;
    Ok(config.normalized())
}

/// Настройки, встроенные в сборку
pub fn grid_config() -> &'static GridConfig {
    CONFIG.get_or_init(|| match parse_config(GRID_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid grid.toml, using defaults: {:#}", e);
            GridConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = parse_config(GRID_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, GridConfig::default());
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config = parse_config("search_debounce_ms = 250").unwrap();
        assert_eq!(config.search_debounce_ms, 250);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.page_size_options, vec![10, 20, 50, 100]);
    }

    #[test]
    fn test_page_size_is_normalized() {
        let config = parse_config("page_size = 0\npage_size_options = [50, 0, 10, 50]").unwrap();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.page_size_options, vec![10, 20, 50]);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse_config("page_size = \"много\"").is_err());
        assert!(parse_config("page_size = ").is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_debug() {
        let config = parse_config("log_level = \"verbose\"").unwrap();
        assert_eq!(config.log_level(), log::Level::Debug);
        let config = parse_config("log_level = \"WARN\"").unwrap();
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}

// ============================================================================
// CONFIG - Configuración de la app (valores de compilación vía build.rs/.env)
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::utils::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_HISTORY_LIMIT, DEFAULT_LOG_LEVEL, DEFAULT_MOCK_LATENCY_MS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub use_mock_api: bool,
    pub mock_latency_ms: u32,
    /// 0 = historial sin límite
    pub history_limit: usize,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            use_mock_api: true,
            mock_latency_ms: DEFAULT_MOCK_LATENCY_MS,
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Configuración fijada en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                "API_BASE_URL" => option_env!("API_BASE_URL"),
                "USE_MOCK_API" => option_env!("USE_MOCK_API"),
                "MOCK_LATENCY_MS" => option_env!("MOCK_LATENCY_MS"),
                "HISTORY_LIMIT" => option_env!("HISTORY_LIMIT"),
                "LOG_LEVEL" => option_env!("LOG_LEVEL"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    /// Construir desde una función de búsqueda (testeable sin variables reales)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        Self {
            api_base_url,
            use_mock_api: parse_or("USE_MOCK_API", lookup("USE_MOCK_API"), defaults.use_mock_api, parse_bool),
            mock_latency_ms: parse_or("MOCK_LATENCY_MS", lookup("MOCK_LATENCY_MS"), defaults.mock_latency_ms, |v| v.parse().ok()),
            history_limit: parse_or("HISTORY_LIMIT", lookup("HISTORY_LIMIT"), defaults.history_limit, |v| v.parse().ok()),
            log_level: parse_or("LOG_LEVEL", lookup("LOG_LEVEL"), defaults.log_level, |v| {
                parse_level(v).map(|_| v.to_ascii_lowercase())
            }),
        }
    }

    /// Nivel para wasm_logger
    pub fn log_level(&self) -> log::Level {
        parse_level(&self.log_level).unwrap_or(log::Level::Info)
    }
}

fn parse_or<T, P>(key: &str, raw: Option<String>, default: T, parse: P) -> T
where
    P: Fn(&str) -> Option<T>,
{
    match raw {
        None => default,
        Some(value) => match parse(value.trim()) {
            Some(parsed) => parsed,
            None => {
                log::warn!("⚠️ [CONFIG] Valor inválido para {}: {:?}, usando default", key, value);
                default
            }
        },
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_level(value: &str) -> Option<log::Level> {
    value.trim().parse::<log::Level>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(AppConfig::from_lookup(|_| None), AppConfig::default());
    }

    #[test]
    fn values_are_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("API_BASE_URL", "https://api.scrapcrafters.in/api/"),
            ("USE_MOCK_API", "false"),
            ("MOCK_LATENCY_MS", "0"),
            ("HISTORY_LIMIT", "5"),
            ("LOG_LEVEL", "DEBUG"),
        ]));
        assert_eq!(config.api_base_url, "https://api.scrapcrafters.in/api");
        assert!(!config.use_mock_api);
        assert_eq!(config.mock_latency_ms, 0);
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("USE_MOCK_API", "perhaps"),
            ("HISTORY_LIMIT", "-3"),
            ("LOG_LEVEL", "loud"),
        ]));
        let defaults = AppConfig::default();
        assert_eq!(config.use_mock_api, defaults.use_mock_api);
        assert_eq!(config.history_limit, defaults.history_limit);
        assert_eq!(config.log_level, defaults.log_level);
    }
}

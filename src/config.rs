use serde::{Deserialize, Serialize};

use crate::models::LngLat;

pub const DEFAULT_STYLE_URL: &str = "mapbox://styles/mapbox/light-v10";
pub const DEFAULT_DATA_BASE_URL: &str = "data";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub mapbox_access_token: String,
    pub map_config: MapConfig,
    pub data_base_url: String,
    pub popup_offset: f64,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mapbox_access_token: String::new(),
            map_config: MapConfig::default(),
            data_base_url: DEFAULT_DATA_BASE_URL.to_string(),
            popup_offset: 15.0,
            enable_logging: true,
        }
    }
}

/// Initial viewport. Fixed for the lifetime of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub style_url: String,
    pub center: LngLat,
    pub zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style_url: DEFAULT_STYLE_URL.to_string(),
            // Ballona Creek, between Culver City and Marina del Rey
            center: LngLat {
                lng: -118.400833,
                lat: 34.007778,
            },
            zoom: 12.0,
        }
    }
}

impl AppConfig {
    /// Builds the config from compile-time env vars (see build.rs), falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            mapbox_access_token: option_env!("MAPBOX_ACCESS_TOKEN")
                .unwrap_or("").to_string(),
            map_config: MapConfig {
                style_url: option_env!("MAP_STYLE_URL")
                    .unwrap_or(DEFAULT_STYLE_URL).to_string(),
                center: LngLat {
                    lng: parse_or(option_env!("DEFAULT_MAP_CENTER_LNG"), defaults.map_config.center.lng),
                    lat: parse_or(option_env!("DEFAULT_MAP_CENTER_LAT"), defaults.map_config.center.lat),
                },
                zoom: parse_or(option_env!("DEFAULT_MAP_ZOOM"), defaults.map_config.zoom),
            },
            data_base_url: option_env!("DATA_BASE_URL")
                .unwrap_or(DEFAULT_DATA_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            popup_offset: parse_or(option_env!("POPUP_OFFSET"), defaults.popup_offset),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
        }
    }

    pub fn mapbox_token(&self) -> &str {
        &self.mapbox_access_token
    }

    /// Without a token Mapbox refuses to load the style and the view stays blank
    pub fn has_access_token(&self) -> bool {
        !self.mapbox_access_token.trim().is_empty()
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }

    /// URL of a static dataset file, relative to the page
    pub fn dataset_url(&self, file_name: &str) -> String {
        if self.data_base_url.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", self.data_base_url, file_name)
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_viewport_is_ballona_creek() {
        let config = AppConfig::default();
        assert_eq!(config.map_config.style_url, "mapbox://styles/mapbox/light-v10");
        assert_eq!(config.map_config.center.lng, -118.400833);
        assert_eq!(config.map_config.center.lat, 34.007778);
        assert_eq!(config.map_config.zoom, 12.0);
        assert_eq!(config.popup_offset, 15.0);
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let mut config = AppConfig::default();
        assert!(!config.has_access_token());

        config.mapbox_access_token = "   ".to_string();
        assert!(!config.has_access_token());

        config.mapbox_access_token = "pk.test".to_string();
        assert!(config.has_access_token());
    }

    #[test]
    fn dataset_url_joins_base() {
        let mut config = AppConfig::default();
        assert_eq!(config.dataset_url("bcw.geojson"), "data/bcw.geojson");

        config.data_base_url = String::new();
        assert_eq!(config.dataset_url("bcw.geojson"), "bcw.geojson");
    }

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or(Some("13.5"), 12.0), 13.5);
        assert_eq!(parse_or(Some("abc"), 12.0), 12.0);
        assert_eq!(parse_or(None, true), true);
        assert_eq!(parse_or(Some(" false "), true), false);
    }
}

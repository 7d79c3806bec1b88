use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_WEATHER_API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Global settings read from `config.yaml`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GlobalConfig {
    pub api_key: String,
    pub city_name: String,
    pub sunset_adjustment: i64, // seconds, applied to sunset only
    pub scheduling_cron_time: String, // five cron fields, e.g. "0 1 * * *"
    pub scheduling_cron_user: String,
    pub scheduling_cron_file: PathBuf,
    pub cron_directory: PathBuf,
    pub log_file: PathBuf,
    #[serde(default = "default_weather_api_url")]
    pub weather_api_url: String,
    #[serde(default = "default_camera_cron_user")]
    pub camera_cron_user: String, // user the per-camera triggers run as
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_weather_api_url() -> String {
    DEFAULT_WEATHER_API_URL.to_string()
}

fn default_camera_cron_user() -> String {
    "root".to_string()
}

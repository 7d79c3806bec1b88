use crate::app_config::GlobalConfig;
use crate::camera_config::CameraRecord;
use crate::errors::AppError;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Instant;

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_CAMERAS_FILE: &str = "cameras.yaml";

pub fn load_config(path: &Path) -> Result<GlobalConfig, AppError> {
    debug!("📄 Attempting to load config from: {}", path.display());
    let start_time = Instant::now();

    let config_str = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("Failed to read configuration file '{}': {}", path.display(), e)))?;
    let config = parse_config(&config_str, path)?;

    info!("✅ Successfully loaded and validated configuration from '{}' in {:?}", path.display(), start_time.elapsed());
    Ok(config)
}

pub fn parse_config(config_str: &str, origin: &Path) -> Result<GlobalConfig, AppError> {
    let config: GlobalConfig = serde_yaml::from_str(config_str)
        .map_err(|e| AppError::Config(format!("Failed to parse YAML configuration from '{}': {}", origin.display(), e)))?;
    validate_global_config(&config, origin)?;
    for (key, value) in describe_config(&config) {
        debug!("Config key: {}, value: {}", key, value);
    }
    Ok(config)
}

/// Loads the cameras file: a YAML stream with one camera per document.
pub fn load_cameras(path: &Path) -> Result<Vec<CameraRecord>, AppError> {
    debug!("📄 Parsing cameras file: {}", path.display());
    let start_time = Instant::now();

    let cameras_str = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("Failed to read cameras file '{}': {}", path.display(), e)))?;
    let cameras = parse_cameras(&cameras_str, path)?;

    info!("📷 Loaded {} camera(s) from '{}' in {:?}", cameras.len(), path.display(), start_time.elapsed());
    Ok(cameras)
}

pub fn parse_cameras(cameras_str: &str, origin: &Path) -> Result<Vec<CameraRecord>, AppError> {
    let mut cameras = Vec::new();
    for (idx, document) in serde_yaml::Deserializer::from_str(cameras_str).enumerate() {
        let value = serde_yaml::Value::deserialize(document).map_err(|e| {
            AppError::Config(format!("Invalid YAML in document #{} of '{}': {}", idx + 1, origin.display(), e))
        })?;
        if value.is_null() {
            debug!("Skipping empty document #{} in '{}'", idx + 1, origin.display());
            continue;
        }
        let camera: CameraRecord = serde_yaml::from_value(value).map_err(|e| {
            AppError::Config(format!("Invalid camera in document #{} of '{}': {}", idx + 1, origin.display(), e))
        })?;
        validate_camera(&camera, origin)?;
        cameras.push(camera);
    }
    Ok(cameras)
}

fn require(value: &str, field: &str, origin: &Path) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::MissingField {
            file: origin.display().to_string(),
            field: field.to_string(),
        });
    }
    Ok(())
}

fn validate_global_config(config: &GlobalConfig, origin: &Path) -> Result<(), AppError> {
    debug!("🕵️ Validating global configuration...");
    require(&config.api_key, "api_key", origin)?;
    require(&config.city_name, "city_name", origin)?;
    require(&config.scheduling_cron_time, "scheduling_cron_time", origin)?;
    require(&config.scheduling_cron_user, "scheduling_cron_user", origin)?;
    require(&config.camera_cron_user, "camera_cron_user", origin)?;
    require(&config.weather_api_url, "weather_api_url", origin)?;
    require(&config.scheduling_cron_file.to_string_lossy(), "scheduling_cron_file", origin)?;
    require(&config.cron_directory.to_string_lossy(), "cron_directory", origin)?;
    require(&config.log_file.to_string_lossy(), "log_file", origin)?;

    let fields = config.scheduling_cron_time.split_whitespace().count();
    if fields != 5 {
        return Err(AppError::Config(format!(
            "❌ scheduling_cron_time '{}' must have 5 fields, found {}.",
            config.scheduling_cron_time, fields
        )));
    }
    Ok(())
}

fn validate_camera(camera: &CameraRecord, origin: &Path) -> Result<(), AppError> {
    require(&camera.name, "camera", origin)?;
    // Used as a cron.d file name and a cron command argument.
    if !camera.name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(AppError::Config(format!(
            "❌ Camera name '{}' may only contain letters, digits, '_' and '-'.",
            camera.name
        )));
    }
    require(&camera.sunrise_url, "sunrise_url", origin)?;
    require(&camera.sunset_url, "sunset_url", origin)?;
    debug!("Camera '{}' validated successfully.", camera.name);
    Ok(())
}

// API key masked.
fn describe_config(config: &GlobalConfig) -> Vec<(&'static str, String)> {
    vec![
        ("api_key", "********".to_string()),
        ("city_name", config.city_name.clone()),
        ("sunset_adjustment", config.sunset_adjustment.to_string()),
        ("scheduling_cron_time", config.scheduling_cron_time.clone()),
        ("scheduling_cron_user", config.scheduling_cron_user.clone()),
        ("scheduling_cron_file", config.scheduling_cron_file.display().to_string()),
        ("cron_directory", config.cron_directory.display().to_string()),
        ("log_file", config.log_file.display().to_string()),
        ("weather_api_url", config.weather_api_url.clone()),
        ("camera_cron_user", config.camera_cron_user.clone()),
    ]
}

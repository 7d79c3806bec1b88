use crate::app_config::GlobalConfig;
use crate::camera_config::CameraRecord;
use crate::common::file_utils;
use crate::core::camera_manager::CameraManager;
use crate::core::sun_times::SunTimesClient;
use crate::core::trigger_definition::{camera_trigger_line, camera_trigger_path, InvocationCommand};
use crate::core::trigger_time::{Transition, TriggerTime};
use crate::operations::op_helper::run_for_each_camera;
use anyhow::{Context, Result};
use log::{debug, error, info};

/// Writes the sunrise and sunset trigger files of one camera.
/// Both files are always attempted; returns how many writes failed.
pub fn write_camera_triggers(
    sunrise: &TriggerTime,
    sunset: &TriggerTime,
    config: &GlobalConfig,
    command: &InvocationCommand,
    camera: &CameraRecord,
) -> usize {
    debug!("Beginning to build out cron file for {}", camera.name);
    let mut failures = 0;
    for (transition, time) in [(Transition::Sunrise, sunrise), (Transition::Sunset, sunset)] {
        let path = camera_trigger_path(&config.cron_directory, &camera.name, transition);
        let line = camera_trigger_line(time, config, command, &camera.name, transition);
        debug!("{} file - {}", transition, path.display());
        debug!("{} command: {}", transition, line);
        if let Err(e) = file_utils::write_trigger_file(&path, &line) {
            error!("❌ Cam [{}]: {}", camera.name, e);
            failures += 1;
        }
    }
    if failures == 0 {
        debug!("Completed writing sunrise and sunset files for {}.", camera.name);
    }
    failures
}

/// Fetches today's sun times and rewrites every camera's trigger files.
/// A weather failure aborts before anything is written; write failures do not.
pub async fn handle_regenerate_cli(
    config: &GlobalConfig,
    camera_manager: &CameraManager,
    command: &InvocationCommand,
    sun_client: &SunTimesClient,
) -> Result<usize> {
    let (sunrise, sunset) = sun_client
        .fetch_trigger_times(&config.api_key, &config.city_name, config.sunset_adjustment)
        .await
        .with_context(|| format!("Failed to get sunrise/sunset times for '{}'", config.city_name))?;

    let failures = run_for_each_camera(camera_manager.get_all_cameras(), "Trigger Regeneration", |camera| {
        write_camera_triggers(&sunrise, &sunset, config, command, camera)
    });
    info!(
        "📝 Trigger files in {} refreshed for {} camera(s), {} write failure(s).",
        config.cron_directory.display(),
        camera_manager.len(),
        failures
    );
    Ok(failures)
}

use crate::camera::camera_controller::CameraController;
use crate::camera::mode_switcher::SwitchOutcome;
use crate::core::camera_manager::CameraManager;
use crate::core::trigger_time::Transition;
use anyhow::{Context, Result};
use log::{info, warn};

/// Switches the first camera named `camera_name` (any case) to `transition`.
/// Returns `Ok(None)` when no such camera is configured.
pub async fn handle_switch_cli(
    camera_manager: &CameraManager,
    controller: &CameraController,
    camera_name: &str,
    transition: Transition,
) -> Result<Option<SwitchOutcome>> {
    info!("Switching {} to {}", camera_name, transition);

    let Some(camera) = camera_manager.find_by_name(camera_name) else {
        warn!("⚠️ Camera '{}' not found in the cameras file.", camera_name);
        return Ok(None);
    };
    info!("Found {} in cameras file.", camera.name);

    let outcome = controller
        .switch_mode(camera, transition)
        .await
        .with_context(|| format!("Failed to switch '{}' to {}", camera.name, transition))?;
    Ok(Some(outcome))
}

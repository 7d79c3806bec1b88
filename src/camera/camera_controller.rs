use crate::camera::mode_switcher::{switcher_for, SwitchOutcome};
use crate::camera_config::CameraRecord;
use crate::core::trigger_time::Transition;
use crate::errors::AppError;
use log::{debug, info};
use reqwest::Client;
use std::time::Instant;

#[derive(Clone)]
pub struct CameraController {
    http_client: Client,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        CameraController {
            http_client: Client::new(),
        }
    }

    /// Sends the camera's sunrise or sunset request using its configured auth method.
    pub async fn switch_mode(&self, camera: &CameraRecord, transition: Transition) -> Result<SwitchOutcome, AppError> {
        let start_time = Instant::now();
        info!("Switching {} to {}...", camera.name, transition);

        let switcher = switcher_for(&camera.auth_method, &self.http_client);
        debug!("Cam [{}]: using the '{}' switcher", camera.name, switcher.auth_method());
        let outcome = switcher.switch(camera, transition).await?;
        if let SwitchOutcome::Switched { status, body } = &outcome {
            info!(
                "✅ Received {} status code and camera responded with {} ({:?})",
                status.as_u16(),
                body,
                start_time.elapsed()
            );
        }
        Ok(outcome)
    }
}

use crate::camera_config::{AuthMethod, CameraRecord};
use crate::core::trigger_time::Transition;
use crate::errors::AppError;
use async_trait::async_trait;
use diqwest::WithDigestAuth;
use log::{debug, error, warn};
use reqwest::{Client, StatusCode};

/// What a mode switch produced, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    Switched { status: StatusCode, body: String },
    Skipped,
}

// --- The ModeSwitcher Trait ---

/// One implementation per supported camera auth method.
#[async_trait]
pub trait ModeSwitcher: Send + Sync {
    fn auth_method(&self) -> AuthMethod;

    async fn switch(&self, camera: &CameraRecord, transition: Transition) -> Result<SwitchOutcome, AppError>;
}

pub struct DigestSwitcher {
    http_client: Client,
}

impl DigestSwitcher {
    pub fn new(http_client: Client) -> Self {
        DigestSwitcher { http_client }
    }
}

#[async_trait]
impl ModeSwitcher for DigestSwitcher {
    fn auth_method(&self) -> AuthMethod {
        AuthMethod::Digest
    }

    async fn switch(&self, camera: &CameraRecord, transition: Transition) -> Result<SwitchOutcome, AppError> {
        let url = camera.url_for(transition);
        debug!("Cam [{}]: Performing GET on {}", camera.name, url);

        let response = self
            .http_client
            .get(url)
            .send_with_digest_auth(&camera.login, &camera.password)
            .await
            .map_err(|e| {
                error!("Cam [{}]: HTTP request send failed: {}", camera.name, e);
                AppError::Network(format!("HTTP send failed for {}: {}", camera.name, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Cam [{}]: HTTP request failed with status: {}", camera.name, status);
            return Err(AppError::HttpStatus {
                camera_name: camera.name.clone(),
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|e| {
            AppError::Network(format!("Failed to read response body from {}: {}", camera.name, e))
        })?;
        Ok(SwitchOutcome::Switched {
            status,
            body: body.trim().to_string(),
        })
    }
}

/// `auth: none`: the camera is listed but never switched.
pub struct DisabledSwitcher;

#[async_trait]
impl ModeSwitcher for DisabledSwitcher {
    fn auth_method(&self) -> AuthMethod {
        AuthMethod::None
    }

    async fn switch(&self, camera: &CameraRecord, transition: Transition) -> Result<SwitchOutcome, AppError> {
        warn!(
            "Cam [{}]: auth method is 'none', not sending the {} request.",
            camera.name, transition
        );
        Ok(SwitchOutcome::Skipped)
    }
}

/// Any other `auth` value: loaded with the camera, refused at switch time.
pub struct UnsupportedSwitcher {
    method: String,
}

#[async_trait]
impl ModeSwitcher for UnsupportedSwitcher {
    fn auth_method(&self) -> AuthMethod {
        AuthMethod::Unsupported(self.method.clone())
    }

    async fn switch(&self, camera: &CameraRecord, _transition: Transition) -> Result<SwitchOutcome, AppError> {
        error!("Cam [{}]: auth method '{}' is not supported.", camera.name, self.method);
        Err(AppError::UnsupportedAuth {
            camera_name: camera.name.clone(),
            method: self.method.clone(),
        })
    }
}

pub fn switcher_for(auth_method: &AuthMethod, http_client: &Client) -> Box<dyn ModeSwitcher> {
    match auth_method {
        AuthMethod::Digest => Box::new(DigestSwitcher::new(http_client.clone())),
        AuthMethod::None => Box::new(DisabledSwitcher),
        AuthMethod::Unsupported(method) => Box::new(UnsupportedSwitcher { method: method.clone() }),
    }
}

use crate::camera_config::{AuthMethod, CameraRecord};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::time::Instant;

/// Ordered camera list as read from the cameras file.
pub struct CameraManager {
    cameras: Vec<CameraRecord>,
}

impl CameraManager {
    pub fn new(cameras: Vec<CameraRecord>) -> Self {
        debug!("🛠️ Initializing CameraManager...");
        let start_time = Instant::now();
        let mut seen = HashSet::new();
        for (idx, cam) in cameras.iter().enumerate() {
            debug!("  Camera #{}: {} ({}, auth {})", idx + 1, cam.name, cam.ip, cam.auth_method);
            if !seen.insert(cam.name.to_lowercase()) {
                warn!("⚠️ Duplicate camera name '{}' (#{}); only the first entry will be switched.", cam.name, idx + 1);
            }
            if let AuthMethod::Unsupported(method) = &cam.auth_method {
                warn!("⚠️ Camera '{}' uses unsupported auth method '{}'; switching it will fail.", cam.name, method);
            }
        }
        info!("✅ CameraManager initialized with {} cameras in {:?}.", cameras.len(), start_time.elapsed());
        CameraManager { cameras }
    }

    pub fn get_all_cameras(&self) -> &[CameraRecord] {
        &self.cameras
    }

    /// First camera whose name matches case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&CameraRecord> {
        let wanted = name.to_lowercase();
        let found = self.cameras.iter().find(|cam| cam.name.to_lowercase() == wanted);
        match found {
            Some(cam) => debug!("  Found camera: {}", cam.name),
            None => debug!("  Camera not found: {}", name),
        }
        found
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }
}

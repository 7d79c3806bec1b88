use crate::camera_config::CameraRecord;
use log::{debug, info, warn};
use std::time::Instant;

/// Runs `per_camera_op` for every camera in order without stopping on failures.
///
/// `per_camera_op` reports how many of its steps failed; it is expected to log
/// the failures itself. Returns the total number of failed steps.
pub fn run_for_each_camera<F>(cameras: &[CameraRecord], operation_display_name: &str, mut per_camera_op: F) -> usize
where
    F: FnMut(&CameraRecord) -> usize,
{
    let op_helper_start_time = Instant::now();
    info!("🛠️ Starting '{}' for {} camera(s)...", operation_display_name, cameras.len());

    if cameras.is_empty() {
        warn!("⚠️ No cameras configured for '{}'.", operation_display_name);
        return 0;
    }

    let mut operation_errors = 0;
    for (i, camera) in cameras.iter().enumerate() {
        let cam_start_time = Instant::now();
        debug!("  Camera {} of {}: '{}'", i + 1, cameras.len(), camera.name);
        let failures = per_camera_op(camera);
        operation_errors += failures;
        debug!("  '{}' for '{}' done in {:?} ({} failure(s)).", operation_display_name, camera.name, cam_start_time.elapsed(), failures);
    }

    if operation_errors == 0 {
        info!("✅ '{}' completed successfully for {} camera(s).", operation_display_name, cameras.len());
    } else {
        warn!(
            "⚠️ '{}' completed with {} error(s) across {} camera(s). Please check logs.",
            operation_display_name,
            operation_errors,
            cameras.len()
        );
    }
    info!("🏁 '{}' finished in {:?}.", operation_display_name, op_helper_start_time.elapsed());
    operation_errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera_config::AuthMethod;

    fn camera(name: &str) -> CameraRecord {
        CameraRecord {
            name: name.to_string(),
            ip: "10.0.0.2".to_string(),
            login: "admin".to_string(),
            password: "pw".to_string(),
            auth_method: AuthMethod::None,
            sunrise_url: "http://10.0.0.2/day".to_string(),
            sunset_url: "http://10.0.0.2/night".to_string(),
            notify: None,
        }
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let cameras = vec![camera("a"), camera("b"), camera("c")];
        let mut visited = Vec::new();
        let failures = run_for_each_camera(&cameras, "test", |cam| {
            visited.push(cam.name.clone());
            if cam.name == "a" { 2 } else { 0 }
        });
        assert_eq!(failures, 2);
        assert_eq!(visited, vec!["a", "b", "c"]);
    }
}

// Shared helpers for the integration tests.
#![allow(dead_code)]

use camdaynight::app_config::GlobalConfig;
use camdaynight::camera_config::{AuthMethod, CameraRecord};
use std::path::{Path, PathBuf};
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DIGEST_CHALLENGE: &str =
    r#"Digest realm="camera", nonce="dcd98b7102dd2f0e8b11d0f600bfb0c093", qop="auth", algorithm=MD5"#;

pub fn global_config(dir: &Path, weather_api_url: &str) -> GlobalConfig {
    GlobalConfig {
        api_key: "test-key".to_string(),
        city_name: "Oslo".to_string(),
        sunset_adjustment: -1800,
        scheduling_cron_time: "0 1 * * *".to_string(),
        scheduling_cron_user: "root".to_string(),
        scheduling_cron_file: dir.join("camdaynight"),
        cron_directory: dir.to_path_buf(),
        log_file: PathBuf::from("/var/log/camdaynight.log"),
        weather_api_url: weather_api_url.to_string(),
        camera_cron_user: "root".to_string(),
        log_level: None,
    }
}

pub fn camera(name: &str, base_url: &str, auth_method: AuthMethod) -> CameraRecord {
    CameraRecord {
        name: name.to_string(),
        ip: "127.0.0.1".to_string(),
        login: "admin".to_string(),
        password: "secret".to_string(),
        auth_method,
        sunrise_url: format!("{}/day", base_url),
        sunset_url: format!("{}/night", base_url),
        notify: None,
    }
}

/// Mounts a digest-protected endpoint: a challenge for the first request,
/// `status` once an Authorization header is present.
pub async fn mount_digest_endpoint(server: &MockServer, endpoint: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .with_priority(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(401).insert_header("www-authenticate", DIGEST_CHALLENGE))
        .with_priority(2)
        .mount(server)
        .await;
}

pub async fn requests_to(server: &MockServer, endpoint: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == endpoint)
        .count()
}

use crate::app_config::GlobalConfig;
use crate::common::file_utils;
use crate::core::trigger_definition::{scheduling_line, InvocationCommand};
use log::{error, info, warn};

/// Writes the daily self-scheduling trigger. Failures are logged, not returned.
pub fn handle_setup_cli(config: &GlobalConfig, command: &InvocationCommand) -> bool {
    info!("⚙️ Running setup process");
    let line = scheduling_line(config, command);
    info!(
        "Creating the {} scheduling file with the following contents: {}",
        config.scheduling_cron_file.display(),
        line
    );
    match file_utils::write_trigger_file(&config.scheduling_cron_file, &line) {
        Ok(()) => {
            info!("✅ Scheduling file written: {}", config.scheduling_cron_file.display());
            true
        }
        Err(e) => {
            error!("❌ {}", e);
            false
        }
    }
}

/// Logs a hint when the scheduling file has not been set up yet. Never creates it.
pub fn check_scheduling_file(config: &GlobalConfig, program_hint: &str) -> bool {
    let exists = config.scheduling_cron_file.is_file();
    if !exists {
        warn!(
            "Scheduling cron does NOT exist, please run \"{} -s\" to setup the script!",
            program_hint
        );
    }
    exists
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn config(scheduling_cron_file: PathBuf) -> GlobalConfig {
        GlobalConfig {
            api_key: "key".to_string(),
            city_name: "Oslo".to_string(),
            sunset_adjustment: 0,
            scheduling_cron_time: "0 1 * * *".to_string(),
            scheduling_cron_user: "root".to_string(),
            scheduling_cron_file,
            cron_directory: PathBuf::from("/etc/cron.d"),
            log_file: PathBuf::from("/var/log/camdaynight.log"),
            weather_api_url: "http://localhost/weather".to_string(),
            camera_cron_user: "root".to_string(),
            log_level: None,
        }
    }

    fn command() -> InvocationCommand {
        InvocationCommand::new(PathBuf::from("/usr/local/bin/camdaynight"))
    }

    #[test]
    fn absent_scheduling_file_is_reported_and_not_created() {
        let dir = tempdir().unwrap();
        let cfg = config(dir.path().join("camdaynight"));
        assert!(!check_scheduling_file(&cfg, "/usr/local/bin/camdaynight"));
        assert!(!cfg.scheduling_cron_file.exists());
    }

    #[test]
    fn present_scheduling_file_is_reported() {
        let dir = tempdir().unwrap();
        let cfg = config(dir.path().join("camdaynight"));
        fs::write(&cfg.scheduling_cron_file, "0 1 * * * root /usr/local/bin/camdaynight\n").unwrap();
        assert!(check_scheduling_file(&cfg, "/usr/local/bin/camdaynight"));
    }

    #[test]
    fn directory_is_not_a_scheduling_file() {
        let dir = tempdir().unwrap();
        let cfg = config(dir.path().to_path_buf());
        assert!(!check_scheduling_file(&cfg, "camdaynight"));
    }

    #[test]
    fn setup_writes_the_scheduling_line() {
        let dir = tempdir().unwrap();
        let cfg = config(dir.path().join("camdaynight"));
        assert!(handle_setup_cli(&cfg, &command()));
        assert_eq!(
            fs::read_to_string(&cfg.scheduling_cron_file).unwrap(),
            "0 1 * * * root /usr/local/bin/camdaynight >> /var/log/camdaynight.log 2>&1\n"
        );
        assert!(check_scheduling_file(&cfg, "camdaynight"));
    }

    #[test]
    fn setup_into_missing_directory_returns_false() {
        let dir = tempdir().unwrap();
        let cfg = config(dir.path().join("absent").join("camdaynight"));
        assert!(!handle_setup_cli(&cfg, &command()));
        assert!(!Path::new(&cfg.scheduling_cron_file).exists());
    }
}

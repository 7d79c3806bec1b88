use crate::app_config::GlobalConfig;
use crate::core::trigger_time::{Transition, TriggerTime};
use std::path::{Path, PathBuf};

/// The command a trigger re-runs: this program plus the config-file arguments
/// the current invocation was started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationCommand {
    pub program: PathBuf,
    pub config_args: Vec<String>,
}

impl InvocationCommand {
    pub fn new(program: PathBuf) -> Self {
        InvocationCommand {
            program,
            config_args: Vec::new(),
        }
    }

    pub fn with_config_files(mut self, config_file: &Path, cameras_file: &Path) -> Self {
        self.config_args = vec![
            "--config".to_string(),
            config_file.display().to_string(),
            "--cameras".to_string(),
            cameras_file.display().to_string(),
        ];
        self
    }

    fn render(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.config_args.iter().cloned());
        parts.join(" ")
    }
}

pub fn camera_trigger_path(cron_directory: &Path, camera_name: &str, transition: Transition) -> PathBuf {
    cron_directory.join(format!("{}-{}", transition, camera_name))
}

/// `<M> <H> * * * <user> <program> [config args] -c <camera> -t <transition>`
pub fn camera_trigger_line(
    time: &TriggerTime,
    config: &GlobalConfig,
    command: &InvocationCommand,
    camera_name: &str,
    transition: Transition,
) -> String {
    format!(
        "{} {} {} -c {} -t {}",
        time.cron_expression(),
        config.camera_cron_user,
        command.render(),
        camera_name,
        transition
    )
}

/// `<cron time> <user> <program> [config args] >> <log file> 2>&1`
pub fn scheduling_line(config: &GlobalConfig, command: &InvocationCommand) -> String {
    format!(
        "{} {} {} >> {} 2>&1",
        config.scheduling_cron_time.trim(),
        config.scheduling_cron_user,
        command.render(),
        config.log_file.display()
    )
}

use crate::app_config::GlobalConfig;
use crate::camera::camera_controller::CameraController;
use crate::camera::mode_switcher::SwitchOutcome;
use crate::cli::Invocation;
use crate::config_loader::{self, DEFAULT_CAMERAS_FILE, DEFAULT_CONFIG_FILE};
use crate::core::camera_manager::CameraManager;
use crate::core::sun_times::SunTimesClient;
use crate::core::trigger_definition::InvocationCommand;
use crate::core::trigger_time::Transition;
use crate::operations::{regenerate_op, setup_op, switch_op};
use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Locations of the two YAML input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFiles {
    pub config: PathBuf,
    pub cameras: PathBuf,
    pub explicit: bool, // overridden on the command line
}

impl ConfigFiles {
    /// CLI overrides, made absolute against `working_dir`, else the files in `default_dir`.
    pub fn resolve(invocation: &Invocation, default_dir: &Path, working_dir: &Path) -> Self {
        let absolute = |p: &PathBuf| if p.is_absolute() { p.clone() } else { working_dir.join(p) };
        ConfigFiles {
            config: invocation
                .config_file
                .as_ref()
                .map(absolute)
                .unwrap_or_else(|| default_dir.join(DEFAULT_CONFIG_FILE)),
            cameras: invocation
                .cameras_file
                .as_ref()
                .map(absolute)
                .unwrap_or_else(|| default_dir.join(DEFAULT_CAMERAS_FILE)),
            explicit: invocation.config_file.is_some() || invocation.cameras_file.is_some(),
        }
    }

    /// The command scheduled triggers run, reading the same files as this run.
    pub fn invocation_command(&self, program: PathBuf) -> InvocationCommand {
        let command = InvocationCommand::new(program);
        if self.explicit {
            command.with_config_files(&self.config, &self.cameras)
        } else {
            command
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    SetupHint,
    Setup,
    Switch { camera: String, transition: Transition },
    Regenerate,
}

/// Modes to run, in execution order. More than one may apply.
pub fn plan_modes(invocation: &Invocation) -> Vec<Mode> {
    let mut modes = Vec::new();
    if invocation.no_arguments {
        modes.push(Mode::SetupHint);
    }
    if invocation.setup {
        modes.push(Mode::Setup);
    }
    match (&invocation.camera, invocation.transition) {
        (Some(camera), Some(transition)) => modes.push(Mode::Switch {
            camera: camera.clone(),
            transition,
        }),
        (None, None) if !invocation.setup => modes.push(Mode::Regenerate),
        _ => {}
    }
    modes
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub executed: Vec<Mode>,
    pub scheduling_file_present: Option<bool>,
    pub scheduling_file_written: Option<bool>,
    pub trigger_write_failures: usize,
    pub switch_outcome: Option<SwitchOutcome>,
}

pub struct Dispatcher {
    config: GlobalConfig,
    files: ConfigFiles,
    command: InvocationCommand,
    sun_client: SunTimesClient,
    controller: CameraController,
}

impl Dispatcher {
    pub fn new(config: GlobalConfig, files: ConfigFiles, program: PathBuf) -> Self {
        let command = files.invocation_command(program);
        let sun_client = SunTimesClient::from_config(&config);
        Dispatcher {
            config,
            files,
            command,
            sun_client,
            controller: CameraController::new(),
        }
    }

    pub fn command(&self) -> &InvocationCommand {
        &self.command
    }

    fn load_camera_manager(&self) -> Result<CameraManager> {
        let cameras = config_loader::load_cameras(&self.files.cameras)
            .with_context(|| format!("Failed to load cameras from '{}'", self.files.cameras.display()))?;
        Ok(CameraManager::new(cameras))
    }

    /// Runs every applicable mode. Only configuration and weather faults are returned as errors.
    pub async fn run(&self, invocation: &Invocation) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        if invocation.camera.is_some() != invocation.transition.is_some() {
            warn!("⚠️ Both --camera and --time are needed to switch a camera; nothing to switch.");
        }

        for mode in plan_modes(invocation) {
            let mode_start_time = Instant::now();
            debug!("🎬 Dispatching to mode: {:?}", mode);
            match &mode {
                Mode::SetupHint => {
                    summary.scheduling_file_present = Some(setup_op::check_scheduling_file(
                        &self.config,
                        &self.command.program.display().to_string(),
                    ));
                }
                Mode::Setup => {
                    summary.scheduling_file_written = Some(setup_op::handle_setup_cli(&self.config, &self.command));
                }
                Mode::Switch { camera, transition } => {
                    let camera_manager = self.load_camera_manager()?;
                    match switch_op::handle_switch_cli(&camera_manager, &self.controller, camera, *transition).await {
                        Ok(outcome) => summary.switch_outcome = outcome,
                        Err(e) => error!("❌ {:#}", e),
                    }
                }
                Mode::Regenerate => {
                    let camera_manager = self.load_camera_manager()?;
                    summary.trigger_write_failures = regenerate_op::handle_regenerate_cli(
                        &self.config,
                        &camera_manager,
                        &self.command,
                        &self.sun_client,
                    )
                    .await?;
                }
            }
            debug!("Mode {:?} finished in {:?}.", mode, mode_start_time.elapsed());
            summary.executed.push(mode);
        }

        if summary.executed.is_empty() {
            info!("🤔 Nothing to do for the given arguments.");
        }
        Ok(summary)
    }
}

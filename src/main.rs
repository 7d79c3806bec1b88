use anyhow::{Context, Result};
use camdaynight::cli;
use camdaynight::common::{file_utils, logging_setup};
use camdaynight::config_loader;
use camdaynight::dispatcher::{ConfigFiles, Dispatcher};
use log::{debug, error, info};
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<()> {
    let main_start_time = Instant::now();
    let invocation = cli::parse_invocation(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let program = file_utils::resolve_program_path().context("Failed to resolve program path")?;
    let program_dir = file_utils::program_directory().context("Failed to resolve program directory")?;
    let working_dir = std::env::current_dir().context("Failed to read current directory")?;
    let files = ConfigFiles::resolve(&invocation, &program_dir, &working_dir);

    let config_load_start_time = Instant::now();
    let config = match config_loader::load_config(&files.config) {
        Ok(cfg) => {
            logging_setup::initialize_logging(Some(&cfg), invocation.verbose);
            debug!("Verbose output enabled");
            info!("✅ Configuration loaded from: {} in {:?}", files.config.display(), config_load_start_time.elapsed());
            cfg
        }
        Err(e) => {
            logging_setup::initialize_logging(None, invocation.verbose);
            error!("❌ Failed to load configuration from '{}': {}. Exiting.", files.config.display(), e);
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to load configuration from '{}'", files.config.display())));
        }
    };

    let dispatcher = Dispatcher::new(config, files, program);
    debug!("Scheduled command: {:?}", dispatcher.command());
    let summary = dispatcher.run(&invocation).await?;

    info!("🏁 Finished {:?} in {:?}, goodbye...", summary.executed, main_start_time.elapsed());
    Ok(())
}

use crate::app_config::GlobalConfig;
use crate::common::timestamp_utils::{current_local_timestamp_str, LOG_TIMESTAMP_FORMAT};
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Resolve the log level: `--verbose`, then the config's `log_level`, then info.
pub fn resolve_level(config: Option<&GlobalConfig>, verbose: bool) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }
    let log_level_str = config
        .and_then(|c| c.log_level.clone())
        .unwrap_or_else(|| "info".to_string());

    match log_level_str.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        s => {
            eprintln!("Unrecognized log level '{}', defaulting to info.", s);
            LevelFilter::Info
        }
    }
}

pub fn initialize_logging(config: Option<&GlobalConfig>, verbose: bool) {
    let mut builder = Builder::new();
    builder.filter_level(resolve_level(config, verbose));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}",
            current_local_timestamp_str(LOG_TIMESTAMP_FORMAT),
            record.level(),
            record.args()
        )
    });

    builder.try_init().unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {}. Logging might not work as expected.", e);
    });
}

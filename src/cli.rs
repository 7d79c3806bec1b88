use crate::core::trigger_time::Transition;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

/// Flags of one run, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    pub verbose: bool,
    pub setup: bool,
    pub camera: Option<String>,
    pub transition: Option<Transition>,
    pub config_file: Option<PathBuf>,
    pub cameras_file: Option<PathBuf>,
    pub no_arguments: bool,
}

fn parse_transition(value: &str) -> Result<Transition, String> {
    value.parse::<Transition>().map_err(|e| e.to_string())
}

pub fn build_cli() -> Command {
    Command::new("camdaynight")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Detects sunrise/sunset from OpenWeatherMap and sets up daily cron jobs that switch cameras between day and night mode.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("setup")
                .short('s')
                .long("setup")
                .help("Setup the cron.d script for daily runs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("camera")
                .short('c')
                .long("camera")
                .value_name("NAME")
                .help("Run the switch against the named camera")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("time")
                .short('t')
                .long("time")
                .value_name("TRANSITION")
                .help("Mode to switch to: sunrise or sunset")
                .value_parser(parse_transition)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Global settings file (default: config.yaml next to the executable)")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("cameras")
                .long("cameras")
                .value_name("FILE")
                .help("Camera records file (default: cameras.yaml next to the executable)")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

impl Invocation {
    pub fn from_matches(matches: &ArgMatches, no_arguments: bool) -> Self {
        Invocation {
            verbose: matches.get_flag("verbose"),
            setup: matches.get_flag("setup"),
            camera: matches.get_one::<String>("camera").cloned(),
            transition: matches.get_one::<Transition>("time").copied(),
            config_file: matches.get_one::<PathBuf>("config").cloned(),
            cameras_file: matches.get_one::<PathBuf>("cameras").cloned(),
            no_arguments,
        }
    }
}

/// Parses a full argv, program name included.
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let no_arguments = args.len() <= 1;
    let matches = build_cli().try_get_matches_from(args)?;
    Ok(Invocation::from_matches(&matches, no_arguments))
}

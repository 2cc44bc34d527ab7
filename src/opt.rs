use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Error;
use clap::Parser;
use log::LevelFilter;

use boca_maker_format::{contest_name, BocaConfig};

#[derive(Parser, Debug)]
#[clap(
    name = "boca-maker",
    version = include_str!(concat!(env!("OUT_DIR"), "/version.txt")),
    about = "Automatic generation of the files of a contest for the BOCA judging system",
    after_help = "Examples:\n    boca-maker fizzbuzz easyled\n    boca-maker -r 0 0 1 2"
)]
pub struct Opt {
    /// Identifiers of the problems, or directories of problems with --random
    #[clap(required = true)]
    pub ids: Vec<String>,

    /// Directory where the contest files are created
    #[clap(short = 'd', value_name = "DIR", default_value_os_t = std::env::temp_dir())]
    pub base_dir: PathBuf,

    /// Date of the contest, printed in the contest document
    ///
    /// Can also be given as -date.
    #[clap(long = "date")]
    pub date: Option<String>,

    /// Make a random contest
    ///
    /// Each id is a directory of problems (relative to the problems directory), a directory listed
    /// N times contributes N different problems.
    #[clap(short = 'r', long = "random")]
    pub random: bool,

    /// Name of the TeX file of the contest, it's also the name of the contest
    #[clap(
        short = 't',
        value_name = "FILE",
        value_parser = parse_document_name,
        default_value_t = default_document_name()
    )]
    pub document: String,

    /// Seed for the random contests
    #[clap(long)]
    pub seed: Option<u64>,

    #[clap(flatten, next_help_heading = Some("CONFIGURATION"))]
    pub config: ConfigOpt,

    #[clap(flatten, next_help_heading = Some("LOGGING"))]
    pub logger: LoggerOpt,
}

#[derive(Parser, Debug, Clone, Default)]
pub struct ConfigOpt {
    /// YAML file with the configuration, the options below take precedence
    #[clap(long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Directory searched for the problems
    #[clap(long = "problems-dir", value_name = "DIR")]
    pub problems_dir: Option<PathBuf>,

    /// Directory with the templates and the BOCA defaults
    #[clap(long = "templates-dir", value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Command used to compile the contest document
    #[clap(long = "typesetter", value_name = "COMMAND")]
    pub typesetter: Option<String>,

    /// Keep the staging directories of the problems
    #[clap(long = "keep-staging")]
    pub keep_staging: bool,
}

#[derive(Parser, Debug, Clone, Default)]
pub struct LoggerOpt {
    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not show the progress of the process
    #[clap(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Check that the name of the contest document is valid.
fn parse_document_name(name: &str) -> Result<String, String> {
    contest_name(name).map_err(|e| e.to_string())?;
    Ok(name.to_string())
}

/// The contest document is named after the current day by default.
fn default_document_name() -> String {
    chrono::Local::now().format("%Y-%m-%d.tex").to_string()
}

/// Rewrite the single-dash `-date` option into `--date`, clap would otherwise read it as `-d ate`.
pub fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-date") => OsString::from("--date"),
            Some(s) if s.starts_with("-date=") => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}

impl Opt {
    /// Parse the command line of the process.
    pub fn from_env() -> Opt {
        Opt::parse_from(normalize_args(std::env::args_os()))
    }
}

impl ConfigOpt {
    /// Build the configuration: the defaults, then the configuration file, then the command line.
    pub fn to_config(&self) -> Result<BocaConfig, Error> {
        let mut config = match &self.config_file {
            Some(path) => BocaConfig::from_yaml(path)?,
            None => BocaConfig::default(),
        };
        if let Some(dir) = &self.problems_dir {
            config.problems_dir = dir.clone();
        }
        if let Some(dir) = &self.templates_dir {
            config.templates_dir = dir.clone();
        }
        if let Some(typesetter) = &self.typesetter {
            config.typesetter = typesetter.clone();
        }
        if self.keep_staging {
            config.keep_staging = true;
        }
        Ok(config)
    }
}

impl LoggerOpt {
    /// The maximum level of the messages to show.
    pub fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Warn;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn enable_log(&self) {
        env_logger::Builder::new()
            .filter_level(self.level())
            .parse_default_env()
            .format_timestamp(None)
            .format_target(self.verbose > 0)
            .init();
        better_panic::install();
    }
}

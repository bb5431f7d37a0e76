/*

    Options of a scan and command line parsing for the
    objbounds binary.

    Usage: objbounds [--lenient] [--json] [-v|-vv] <obj path>

    Flags may appear anywhere, but exactly one positional
    argument (the OBJ path) is accepted. Everything after
    "--" is positional, even if it starts with '-'.

    @date: 10 Nov, 2025
    @author: bartu
*/

use std::path::PathBuf;

use crate::error::UsageError;
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, SmartDefault)]
pub struct ScanConfig {
    /// Skip malformed vertex lines instead of failing the whole scan
    #[default = false]
    pub lenient: bool,
}

impl ScanConfig {
    pub fn lenient() -> Self {
        Self { lenient: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, SmartDefault)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How much the binary logs to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, SmartDefault)]
pub enum Verbosity {
    #[default]
    Quiet,
    Info,
    Debug,
}

impl Verbosity {
    pub fn level(&self) -> tracing::Level {
        match self {
            Verbosity::Quiet => tracing::Level::WARN,
            Verbosity::Info => tracing::Level::INFO,
            Verbosity::Debug => tracing::Level::DEBUG,
        }
    }

    fn raise(self) -> Self {
        match self {
            Verbosity::Quiet => Verbosity::Info,
            _ => Verbosity::Debug,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Scan(CliArgs),
}

#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct CliArgs {
    pub path: PathBuf,
    pub scan: ScanConfig,
    pub format: OutputFormat,
    pub verbosity: Verbosity,
}

pub fn usage(program: &str) -> String {
    format!("Usage: {} [--lenient] [--json] [-v] <obj path>", program)
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cli = CliArgs::default();
    let mut positional: Vec<PathBuf> = Vec::new();
    let mut only_paths = false;

    for arg in args {
        if only_paths {
            positional.push(PathBuf::from(arg.as_ref()));
            continue;
        }
        match arg.as_ref() {
            "-h" | "--help" => return Ok(Command::Help),
            "--lenient" => cli.scan.lenient = true,
            "--json" => cli.format = OutputFormat::Json,
            "-v" | "--verbose" => cli.verbosity = cli.verbosity.raise(),
            "-vv" => cli.verbosity = Verbosity::Debug,
            "--" => only_paths = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(UsageError::UnknownFlag(flag.to_string()));
            }
            path => positional.push(PathBuf::from(path)),
        }
    }

    if positional.len() != 1 {
        return Err(UsageError::WrongArgCount(positional.len()));
    }
    cli.path = positional.remove(0);
    Ok(Command::Scan(cli))
}

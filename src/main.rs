/*

    Print the axis aligned bounding box of the vertices
    of an OBJ file.

    Usage: objbounds [--lenient] [--json] [-v] <obj path>

    @date: Nov, 2025
    @author: Bartu

*/

use std::{self, env, process::ExitCode, time::Instant};
use tracing::{info, debug};

use obj_bounds::config::{self, CliArgs, Command, OutputFormat};
use obj_bounds::error::ScanError;
use obj_bounds::scanner::scan_file;

fn run(cli: &CliArgs) -> Result<(), Box<dyn std::error::Error>> {

    info!("Scanning {}...", cli.path.display());
    let start = Instant::now();
    let report = scan_file(&cli.path, &cli.scan)?;
    info!("Scanned {} vertices in {:.2?}", report.vertices, start.elapsed());
    debug!("{:#?}", report);

    // No vertices means no meaningful bounds, in either format
    let bbox = report.bounds.ok_or_else(|| {
        if report.skipped > 0 {
            ScanError::AllSkipped { path: cli.path.clone(), skipped: report.skipped }
        } else {
            ScanError::NoVertices(cli.path.clone())
        }
    })?;
    if report.skipped > 0 {
        info!("Ignored {} malformed vertex lines", report.skipped);
    }

    match cli.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => println!("{}", bbox),
    }
    Ok(())
}

fn main() -> ExitCode {

    // Parse args
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("objbounds");

    let cli = match config::parse_args(args.iter().skip(1)) {
        Ok(Command::Scan(cli)) => cli,
        Ok(Command::Help) => {
            println!("{}", config::usage(program));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", config::usage(program));
            return ExitCode::FAILURE;
        }
    };

    // Logging on console, kept off stdout so only bounds land there
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.verbosity.level())
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use seg2_rs::{RenderOptions, convert_batch, csv_output_path};

#[derive(Parser, Debug)]
#[command(
    name = "seg2csv",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert SEG2 seismic files to CSV",
    long_about = None,
)]
struct Cli {
    /// SEG2 files to convert
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Directory for the CSV files. Default: next to each input
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// Omit the Time(s) column
    #[arg(long)]
    no_time: bool,
    /// Only report warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
    /// Log header and descriptor details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (_, true) => "debug",
        _ => "info",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .format_timestamp_secs()
        .init();

    if let Some(dir) = &cli.output_dir {
        if let Err(e) = fs::create_dir_all(dir) {
            error!("cannot create {}: {e}", dir.display());
            return ExitCode::FAILURE;
        }
    }

    let options = RenderOptions::new().with_time_column(!cli.no_time);
    let mut failed = 0usize;

    let mut loaded = Vec::with_capacity(cli.inputs.len());
    for input in &cli.inputs {
        match fs::read(input) {
            Ok(data) => loaded.push((input.as_path(), input.display().to_string(), data)),
            Err(e) => {
                error!("failed to read {}: {e}", input.display());
                failed += 1;
            }
        }
    }

    // Decode failures are logged by the batch itself.
    let report = convert_batch(
        loaded
            .iter()
            .map(|(_, name, data)| (name.as_str(), data.as_slice())),
        &options,
    );
    failed += report.failed.len();

    for converted in &report.converted {
        let Some((input, ..)) = loaded.iter().find(|(_, name, _)| *name == converted.filename)
        else {
            continue;
        };
        match write_csv(input, cli.output_dir.as_deref(), &converted.csv) {
            Ok(output) => info!("{} -> {}", input.display(), output.display()),
            Err(e) => {
                error!("{e:#}");
                failed += 1;
            }
        }
    }

    info!(
        "converted {} of {} files",
        cli.inputs.len() - failed,
        cli.inputs.len()
    );
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn write_csv(input: &Path, output_dir: Option<&Path>, csv: &str) -> Result<PathBuf> {
    let output = csv_output_path(input, output_dir)
        .filter(|output| !is_same_file(input, output))
        .with_context(|| format!("refusing to overwrite input {}", input.display()))?;
    fs::write(&output, csv).with_context(|| format!("failed to write {}", output.display()))?;
    Ok(output)
}

/// Both paths resolve to one existing file, e.g. `shot.csv` and `./shot.csv`.
fn is_same_file(a: &Path, b: &Path) -> bool {
    matches!(
        (fs::canonicalize(a), fs::canonicalize(b)),
        (Ok(a), Ok(b)) if a == b
    )
}

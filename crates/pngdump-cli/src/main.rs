//! `pngdump` - dump pixels or an intensity histogram of `camera.png`.
//!
//! ```text
//! pngdump [--roi X,Y:WxH] dump|histogram
//! ```
//!
//! The image path is fixed: the tool always reads `camera.png` from the
//! current directory and requires it to be single-channel.

mod args;

use std::env;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use log::LevelFilter;
use pngdump_core::{
    load_gray_image, write_dump, write_histogram, Command, LoadError, Roi, RoiError,
};

use crate::args::ParseError;

const IMAGE_PATH: &str = "camera.png";

/// Everything that can end an invocation early. Each variant's message is
/// the diagnostic printed to stderr.
#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Roi(#[from] RoiError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    // Fixed filter: the library's debug logging stays off and stderr stays
    // reserved for diagnostics. No environment variables are consulted.
    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .format_timestamp(None)
        .try_init();

    if let Err(err) = run() {
        eprintln!("{err}");
        if matches!(err, CliError::Parse(ParseError::MissingCommand)) {
            eprintln!("usage: pngdump [--roi X,Y:WxH] dump|histogram");
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), CliError> {
    // Non-UTF-8 argv entries decode lossily and fail as unknown tokens.
    let tokens: Vec<String> = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let invocation = args::parse(&tokens)?;

    let img = load_gray_image(Path::new(IMAGE_PATH))?;
    let view = img.as_view();

    let roi = match invocation.roi {
        Some(spec) => spec.resolve(view.width, view.height)?,
        None => Roi::full(view.width, view.height),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match invocation.command {
        Command::Dump => write_dump(&mut out, &view, &roi)?,
        Command::Histogram => write_histogram(&mut out, &view, &roi)?,
    }
    out.flush()?;
    Ok(())
}

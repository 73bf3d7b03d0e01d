//! `ppmtrans`: rotate a PPM image through a chosen grid representation.
//!
//! ```text
//! ppmtrans [-rotate <angle>] [-{row,col,block}-major] [-time <file>] [filename]
//! ```
//!
//! Reads `filename` (or stdin) and writes the rotated image to stdout as
//! binary PPM. Logging goes to stderr; set `RUST_LOG` to see more than
//! warnings.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::process;

use anyhow::Context;
use locality_core::Layout;
use locality_grid::{BLOCKED, PLAIN};
use locality_transform::{transform, TransformConfig, USAGE};
use log::{debug, info};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args_os();
    let program = args
        .next()
        .map_or_else(|| "ppmtrans".to_owned(), |p| p.to_string_lossy().into_owned());
    let config = match TransformConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{program}: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };
    debug!("{config:?}");

    let reader: Box<dyn BufRead> = match &config.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let writer = BufWriter::new(io::stdout().lock());

    let report = match config.layout {
        Layout::Plain => transform(PLAIN, &config, reader, writer),
        Layout::Blocked => transform(BLOCKED, &config, reader, writer),
    }
    .context("transformation failed")?;

    if let Some(path) = &config.timing_path {
        report
            .append_to(path)
            .with_context(|| format!("cannot append timing to {}", path.display()))?;
        info!("timing appended to {}", path.display());
    }
    Ok(())
}

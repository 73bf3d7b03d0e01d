//! Wall-clock timing of a single traversal.
//!
//! [`Stopwatch`] brackets exactly one rotation traversal. The result is
//! recorded in a [`TimingReport`] that can be appended to a text file,
//! one block of lines per run.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::rotate::Rotation;

/// Measures elapsed wall time from [`start`](Stopwatch::start).
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Start timing now.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time since the stopwatch was started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Timing data for one transformation.
///
/// Renders as:
///
/// ```text
/// Filename: <name>
/// Transformation: <angle>
/// Number of Pixels: <n>
/// Total time (ns): <t>
/// Time per pixel (ns): <t / n>
/// ```
///
/// The `Filename` line is omitted when the image came from stdin.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingReport {
    /// Input file, if the image was not read from stdin.
    pub filename: Option<String>,
    /// Rotation that was applied.
    pub rotation: Rotation,
    /// Pixels in the source image.
    pub pixels: usize,
    /// Time spent in the traversal.
    pub elapsed: Duration,
}

impl TimingReport {
    /// Total traversal time in nanoseconds.
    pub fn total_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }

    /// Mean traversal time per pixel in nanoseconds. Zero for an empty image.
    pub fn nanos_per_pixel(&self) -> f64 {
        if self.pixels == 0 {
            return 0.0;
        }
        self.total_nanos() as f64 / self.pixels as f64
    }

    /// Append the report to `path`, creating the file if needed.
    pub fn append_to(&self, path: &Path) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        write!(file, "{self}")?;
        file.flush()
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.filename {
            writeln!(f, "Filename: {name}")?;
        }
        writeln!(f, "Transformation: {}", self.rotation)?;
        writeln!(f, "Number of Pixels: {}", self.pixels)?;
        writeln!(f, "Total time (ns): {}", self.total_nanos())?;
        writeln!(f, "Time per pixel (ns): {:.0}", self.nanos_per_pixel())
    }
}

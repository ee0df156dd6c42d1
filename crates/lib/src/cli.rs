//! CLI helpers.

mod bencher;
pub(crate) mod error;
mod output;
mod output_eq;
mod stdout_logger;

#[cfg(test)]
mod tests;

use core::fmt;
use core::ops::AddAssign;
use core::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

pub use self::bencher::Bencher;
pub use self::error::{error_context, LineCol};
pub(self) use self::output::{Output, OutputKind};
pub use self::output_eq::{OutputEq, Unchecked};

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON report.
    json: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options and install the logger.
    pub fn parse() -> Result<Self> {
        let args = std::env::args_os()
            .skip(1)
            .map(|arg| arg.into_string().map_err(|_| anyhow!("non-utf8 argument")))
            .collect::<Result<Vec<_>>>()?;

        let opts = Self::parse_from(args)?;

        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });

            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            match arg.as_ref() {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--warmup" => {
                    let warmup = it.next().context("missing argument to `--warmup`")?;
                    opts.warmup = Some(
                        warmup
                            .as_ref()
                            .parse()
                            .context("bad argument to `--warmup`")?,
                    );
                }
                "--time-limit" => {
                    let time_limit = it.next().context("missing argument to `--time-limit`")?;
                    opts.time_limit = Some(
                        time_limit
                            .as_ref()
                            .parse()
                            .context("bad argument to `--time-limit`")?,
                    );
                }
                "--count" => {
                    let count = it.next().context("missing argument to `--count`")?;
                    opts.count = Some(
                        count
                            .as_ref()
                            .parse()
                            .context("bad argument to `--count`")?,
                    );
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Emit the answer produced by a solver.
pub fn emit<T>(opts: &Opts, value: &T) -> Result<()>
where
    T: fmt::Debug,
{
    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());
    o.value(value)?;
    Ok(())
}

/// Latency report produced by a benchmark.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    /// Construct a report out of a sorted collection of samples.
    fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();
        let sum = samples.iter().sum::<Duration>();

        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(u64::try_from(sum.as_nanos() / count as u128).unwrap_or_default())
        };

        Self {
            p50: percentile(samples, 50),
            p95: percentile(samples, 95),
            p99: percentile(samples, 99),
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
        }
    }
}

/// Nearest-rank percentile of sorted samples.
fn percentile(samples: &[Duration], p: usize) -> Duration {
    let Some(last) = samples.len().checked_sub(1) else {
        return Duration::default();
    };

    samples.get(last * p / 100).copied().unwrap_or_default()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.p50 += rhs.p50;
        self.p95 += rhs.p95;
        self.p99 += rhs.p99;
        self.count += rhs.count;
        self.min += rhs.min;
        self.max += rhs.max;
        self.avg += rhs.avg;
    }
}

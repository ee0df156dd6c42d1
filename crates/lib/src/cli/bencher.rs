use core::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{bail, Error, Result};

use crate::cli::{Opts, Output, OutputEq, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default bench period in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

#[derive(Default)]
pub struct Bencher {}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn.
    #[inline]
    pub fn iter<T, O, C, E>(&mut self, opts: &Opts, expected: Option<C>, iter: T) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        O: fmt::Debug + OutputEq<C>,
        C: fmt::Debug,
        Error: From<E>,
    {
        let stdout = std::io::stdout();
        let mut o = Output::new(stdout.lock(), opts.output_kind());

        if let Err(e) = self.inner_iter(&mut o, opts, expected, iter) {
            o.error(e)?;
        }

        Ok(())
    }

    fn inner_iter<T, O, C, E>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        expected: Option<C>,
        mut iter: T,
    ) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        O: fmt::Debug + OutputEq<C>,
        C: fmt::Debug,
        Error: From<E>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        let mut sample = || -> Result<Duration> {
            let before = Instant::now();
            let value = iter()?;
            let after = Instant::now();

            if let Some(expect) = &expected {
                if !value.output_eq(expect) {
                    bail!("{value:?} (value) != {expect:?} (expected)");
                }
            }

            black_box(value);
            Ok(after.duration_since(before))
        };

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;

            let start = Instant::now();

            while start.elapsed() < warmup {
                sample()?;
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                samples.push(sample()?);
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                samples.push(sample()?);

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        samples.sort();
        log::debug!("collected {} samples", samples.len());

        let report = Report::from_sorted(&samples);
        o.report(&report)?;
        Ok(())
    }
}

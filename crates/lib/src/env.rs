//! Loading of puzzle inputs.

use std::fs::File;
use std::io::Read;

use anyhow::{anyhow, Context};

use crate::input::IStr;

/// Read the input at `read_path`, reporting errors against `path`.
///
/// The buffer is leaked since inputs are kept around for the remaining
/// lifetime of the process anyway.
#[inline]
pub fn input(path: &'static str, read_path: &str) -> anyhow::Result<IStr> {
    return inner(read_path).with_context(|| anyhow!(path));

    #[inline]
    fn inner(read_path: &str) -> anyhow::Result<IStr> {
        let mut file = File::open(read_path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        log::debug!("read {} bytes from {read_path}", buf.len());
        Ok(IStr::new(Vec::leak(buf), 0))
    }
}

/// Prepare an input processor for a file in the `inputs` directory of the
/// calling crate.
///
/// Evaluates to a tuple of the input and its display path.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        ($crate::env::input(path, read_path)?, path)
    }};
}

use core::fmt;
use std::ops::Range;

use crate::input::{IStr, IStrError, NL};

/// Used in macros to associate the input location with an error.
#[doc(hidden)]
pub fn error_context<E>(path: &'static str, input: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let pos = find_range(&error)
        .map(|span| pos_from(input.as_data(), span))
        .unwrap_or_default();

    error.context(ErrorContext { path, pos })
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Need to be able to unwrap an error fully in case it's threaded through
/// multiple layers of processing.
fn find_range(error: &anyhow::Error) -> Option<Range<usize>> {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map(IStrError::span)
}

/// Get the line and column of the start of the given span.
pub(crate) fn pos_from(data: &[u8], span: Range<usize>) -> LineCol {
    let Some(d) = data.get(..span.start) else {
        return LineCol::default();
    };

    let (line, start) = memchr::memrchr(NL, d)
        .map(|n| (memchr::memchr_iter(NL, d).count(), n + 1))
        .unwrap_or_default();

    LineCol::new(line, span.start - start)
}

/// Location of an error in an input file.
#[derive(Debug)]
struct ErrorContext {
    path: &'static str,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}

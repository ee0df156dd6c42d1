use core::fmt;
use core::ops::Range;

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(&'static str),
    NotUtf8,
    BadArray(usize, usize),
    ExpectedLine,
    ExpectedTuple(usize),
    UnexpectedEof,
    ArrayCapacity(usize),
    /// Error raised by a custom conversion, see [from_input!][crate::from_input].
    Boxed(anyhow::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::BadArray(expected, actual) => {
                write!(f, "bad array; expected {expected}, but got {actual}")
            }
            ErrorKind::ExpectedLine => write!(f, "expected line"),
            ErrorKind::ExpectedTuple(n) => write!(f, "expected tuple of length `{n}`"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::ArrayCapacity(cap) => write!(f, "array out of capacity ({cap})"),
            ErrorKind::Boxed(error) => error.fmt(f),
        }
    }
}

/// Error raised through string processing.
#[derive(Debug)]
pub struct IStrError {
    pub(crate) span: Range<usize>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The byte span of the input that caused the error.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", self.kind, self.span)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IStrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Boxed(error) => error.source(),
            _ => None,
        }
    }
}

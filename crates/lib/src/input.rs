//! Input parser.

mod error;
mod iter;

#[cfg(test)]
mod tests;

use core::mem;
use core::ops;
use std::str::from_utf8;

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::Iter;

pub(self) type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
///
/// The index is the absolute offset of the remaining data into the input it
/// was constructed from, which is what errors are reported against.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    /// The data being parsed.
    data: &'static [u8],
    /// Offset of `data` into the original input.
    index: usize,
}

impl IStr {
    /// Construct a new input processor.
    #[inline]
    pub const fn new(data: &'static [u8], index: usize) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Construct an iterator over the current input.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut input = IStr::new(b"1 2\n3", 0);
    /// let values = input.iter::<u32>().collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(values, [1, 2, 3]);
    /// # Ok::<_, Error>(())
    /// ```
    #[inline]
    pub fn iter<T>(&mut self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if the next
    /// line is not a valid value of type `T`.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if the next
    /// line is not a valid value of type `T`, returns `Ok(None)` if there is
    /// no more data to process.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut input = IStr::new(b"ab\ncd\n", 0);
    /// assert_eq!(input.try_line::<&str>()?, Some("ab"));
    /// assert_eq!(input.try_line::<&str>()?, Some("cd"));
    /// assert_eq!(input.try_line::<&str>()?, None);
    /// # Ok::<_, Error>(())
    /// ```
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        line.try_next()
    }

    /// Consume the given prefix if the input starts with it.
    #[inline]
    pub fn eat(&mut self, prefix: &[u8]) -> bool {
        if !self.data.starts_with(prefix) {
            return false;
        }

        self.advance(prefix.len());
        true
    }

    /// Advance the input by `n` bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(n);
    }

    /// Try to parse the next whitespace delimited word, returning the index at
    /// which it started.
    pub(crate) fn try_next_word<T>(&mut self) -> Result<Option<(usize, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        let start = self.index.saturating_add(s);
        self.advance(n);
        Ok(Some((start, value)))
    }

    /// Split once at the given byte or until the end of string, returning the
    /// new `IStr` associated with the split.
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(b, self.data) else {
            let line = IStr::new(mem::take(&mut self.data), self.index);
            self.index = self.index.saturating_add(line.len());
            return Some(line);
        };

        let line = IStr::new(self.data.get(..at)?, self.index);
        self.advance(at.checked_add(1)?);
        Some(line)
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(range.start)?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `Ok(None)` if the input is exhausted.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest, )*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let start = p.index;

                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Err(IStrError::new(start..p.index, Self::error_kind()));
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

#[rustfmt::skip]
macro_rules! integer {
    ($ty:ty, $error:ident) => {
        impl FromInput for $ty {
            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let Some((start, string)) = p.try_next_word::<&str>()? else {
                    return Ok(None);
                };

                let Ok(n) = str::parse(string) else {
                    return Err(IStrError::new(start..p.index, ErrorKind::$error(string)));
                };

                Ok(Some(n))
            }
        }
    };
}

tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(4 => A a, B b, C c, D d);
tuple!(5 => A a, B b, C c, D d, E e);
tuple!(6 => A a, B b, C c, D d, E e, F f);

integer!(usize, NotInteger);
integer!(isize, NotInteger);
integer!(u8, NotInteger);
integer!(u16, NotInteger);
integer!(u32, NotInteger);
integer!(u64, NotInteger);
integer!(u128, NotInteger);
integer!(i8, NotInteger);
integer!(i16, NotInteger);
integer!(i32, NotInteger);
integer!(i64, NotInteger);
integer!(i128, NotInteger);

impl FromInput for IStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let output = *p;
        p.advance(p.len());
        Ok(Some(output))
    }
}

impl FromInput for &[u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let data = p.data;
        p.advance(data.len());
        Ok(Some(data))
    }
}

impl FromInput for &str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

impl<T, const N: usize> FromInput for arrayvec::ArrayVec<T, N>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;
        let mut output = arrayvec::ArrayVec::new();

        while let Some(element) = T::try_from_input(p)? {
            if output.try_push(element).is_err() {
                return Err(IStrError::new(index..p.index, ErrorKind::ArrayCapacity(N)));
            }
        }

        Ok(Some(output))
    }
}

impl<T, const N: usize> FromInput for [T; N]
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let start = p.index;

        let Some(output) = arrayvec::ArrayVec::<T, N>::try_from_input(p)? else {
            return Ok(None);
        };

        match output.into_inner() {
            Ok(array) => Ok(Some(array)),
            Err(array) => Err(IStrError::new(
                start..p.index,
                ErrorKind::BadArray(N, array.len()),
            )),
        }
    }
}

impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while let Some(element) = T::try_from_input(p)? {
            output.push(element);
        }

        Ok(Some(output))
    }
}

/// Parse a word of input, which parses until we reach a whitespace character.
pub struct W<T>(pub T);

impl<T> FromInput for W<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some((_, value)) = p.try_next_word()? else {
            return Ok(None);
        };

        Ok(Some(Self(value)))
    }
}

/// Read a single byte.
pub struct B(pub u8);

impl FromInput for B {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(&b) = p.data.first() else {
            return Ok(None);
        };

        p.advance(1);
        Ok(Some(Self(b)))
    }
}

//! Shared support for the puzzle solvers.
//!
//! Solvers are written as `fn main(input: IStr) -> Result<T>` and annotated
//! with [`entry`][macros::entry], which takes care of option parsing, loading
//! the input and benchmarking.

pub mod cli;
pub mod env;
pub mod grid;
pub mod input;
mod macros;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::{Grid, GridExt};
    pub use crate::input::{FromInput, IStr, B, W};
    pub use anyhow::{anyhow, bail, ensure, Context, Error, Result};
    pub use macros::entry;

    pub type ArrayString<const N: usize = 16> = arrayvec::ArrayString<N>;
}

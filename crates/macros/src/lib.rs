//! Attribute macros for puzzle solvers.

use proc_macro::TokenStream;

mod entry;
mod error;

/// Turn `fn main(input: IStr) -> Result<T>` into a solver entry point.
///
/// Supported options:
/// * `input = "dNN.txt"` (required) the file under `inputs/` to solve.
/// * `expect = <expr>` the answer the solver must produce for that input.
#[proc_macro_attribute]
pub fn entry(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    crate::entry::build(args, item_stream)
}

use proc_macro::{Delimiter, Group, Ident, Literal, Span, TokenStream, TokenTree};

use crate::error::Error;

/// Expand the annotated function into a `main` entry point.
///
/// The annotated function is kept as an item inside of the generated `main`,
/// so its tokens and spans are passed through untouched.
pub(crate) fn expand(
    input: &Literal,
    expect: Option<&TokenStream>,
    fn_name: &Ident,
    item: TokenStream,
    stream: &mut TokenStream,
) {
    let (compare, expected) = match expect {
        Some(expect) => (
            format!(
                "let expected = {expect};
                assert!(
                    lib::cli::OutputEq::output_eq(&value, &expected),
                    \"{{:?}} (value) != {{:?}} (expected)\",
                    value,
                    expected
                );"
            ),
            format!("Some({expect})"),
        ),
        None => (String::new(), String::from("None::<lib::cli::Unchecked>")),
    };

    let block = format!(
        "let opts = lib::cli::Opts::parse()?;
        let (input, path) = lib::input!({input});

        match opts.mode {{
            lib::cli::Mode::Default => {{
                let value = match {fn_name}(input) {{
                    Ok(value) => value,
                    Err(error) => return Err(lib::cli::error_context(path, input, error)),
                }};

                lib::cli::emit(&opts, &value)?;
                {compare}
            }}
            lib::cli::Mode::Bench => {{
                let mut b = lib::cli::Bencher::new();
                b.iter(&opts, {expected}, || {fn_name}(input))?;
            }}
        }}

        Ok(())"
    );

    let mut body = item;
    body.extend(code(&block));

    stream.extend(code("fn main() -> lib::prelude::Result<()>"));
    stream.extend([TokenTree::Group(Group::new(Delimiter::Brace, body))]);
}

/// Parse generated code.
fn code(source: &str) -> TokenStream {
    match source.parse() {
        Ok(stream) => stream,
        Err(error) => {
            let mut stream = TokenStream::new();
            let message = format!("bad generated code: {error}");
            Error::new(Span::call_site(), message).write_to(&mut stream);
            stream
        }
    }
}

mod output;
mod parser;

use proc_macro::{Span, TokenStream};

use crate::error::Error;

/// Configurable macro code to build entry.
pub(crate) fn build(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    let mut errors = Vec::new();

    let config = parser::ConfigParser::new(args, &mut errors).parse();
    config.validate(&mut errors);

    let fn_name = parser::ItemParser::new(item_stream.clone()).parse();

    if fn_name.is_none() {
        errors.push(Error::new(Span::call_site(), "expected a function item"));
    }

    let mut stream = TokenStream::new();

    match (errors.is_empty(), fn_name, &config.input_file) {
        (true, Some(fn_name), Some(input)) => {
            let expect = config.expect.as_ref();
            output::expand(input, expect, &fn_name, item_stream, &mut stream);
        }
        _ => {
            stream.extend(item_stream);

            for error in errors {
                error.write_to(&mut stream);
            }
        }
    }

    stream
}

use std::iter::Peekable;

use proc_macro::{token_stream, Ident, Literal, Span, TokenStream, TokenTree};

use crate::error::Error;

#[derive(Default)]
pub(crate) struct Config {
    pub(crate) input_file: Option<Literal>,
    pub(crate) expect: Option<TokenStream>,
}

impl Config {
    /// Validate the parsed configuration.
    pub(crate) fn validate(&self, errors: &mut Vec<Error>) {
        if self.input_file.is_none() {
            errors.push(Error::new(Span::call_site(), "missing `input` argument"));
        }
    }
}

/// A parser for the arguments provided to an entry macro.
pub(crate) struct ConfigParser<'a> {
    it: Peekable<token_stream::IntoIter>,
    errors: &'a mut Vec<Error>,
}

impl<'a> ConfigParser<'a> {
    /// Construct a new parser around the given token stream.
    pub(crate) fn new(stream: TokenStream, errors: &'a mut Vec<Error>) -> Self {
        Self {
            it: stream.into_iter().peekable(),
            errors,
        }
    }

    /// Parse the configuration.
    pub(crate) fn parse(mut self) -> Config {
        let mut config = Config::default();

        while self.it.peek().is_some() {
            if self.parse_option(&mut config).is_none() {
                self.recover();
                continue;
            }

            if !self.skip_comma() {
                break;
            }
        }

        if let Some(tt) = self.it.next() {
            self.errors.push(Error::new(tt.span(), "trailing token"));
        }

        config
    }

    /// Recover by parsing either to the next comma `,`, or end of input.
    fn recover(&mut self) {
        for tt in self.it.by_ref() {
            if is_comma(&tt) {
                break;
            }
        }
    }

    fn skip_comma(&mut self) -> bool {
        if self.it.peek().is_some_and(is_comma) {
            self.it.next();
            return true;
        }

        false
    }

    /// Parse a single option.
    fn parse_option(&mut self, config: &mut Config) -> Option<()> {
        match self.it.next() {
            Some(TokenTree::Ident(ident)) => match ident.to_string().as_str() {
                "input" => {
                    self.parse_eq(ident.span())?;
                    config.input_file = Some(self.parse_literal(ident.span())?);
                    Some(())
                }
                "expect" => {
                    self.parse_eq(ident.span())?;
                    config.expect = Some(self.parse_expr(ident.span())?);
                    Some(())
                }
                name => {
                    let message = format!("unknown option `{name}`");
                    self.errors.push(Error::new(ident.span(), message));
                    None
                }
            },
            tt => {
                let span = tt.map(|tt| tt.span()).unwrap_or_else(Span::call_site);
                self.errors.push(Error::new(span, "expected identifier"));
                None
            }
        }
    }

    /// Parse the next element as a literal value.
    fn parse_literal(&mut self, span: Span) -> Option<Literal> {
        if let Some(TokenTree::Literal(literal)) = self.it.peek() {
            let literal = literal.clone();
            self.it.next();
            return Some(literal);
        }

        let span = self.it.peek().map(TokenTree::span).unwrap_or(span);
        self.errors.push(Error::new(span, "expected literal"));
        None
    }

    /// Parse every token up until the next top-level comma as an expression.
    fn parse_expr(&mut self, span: Span) -> Option<TokenStream> {
        let mut expr = TokenStream::new();

        while let Some(tt) = self.it.peek() {
            if is_comma(tt) {
                break;
            }

            expr.extend(self.it.next());
        }

        if expr.is_empty() {
            self.errors.push(Error::new(span, "expected expression"));
            return None;
        }

        Some(expr)
    }

    /// Parse the next element as an `=` punctuation.
    fn parse_eq(&mut self, span: Span) -> Option<()> {
        match self.it.peek() {
            Some(TokenTree::Punct(p)) if p.as_char() == '=' => {
                self.it.next();
                Some(())
            }
            tt => {
                let span = tt.map(TokenTree::span).unwrap_or(span);
                self.errors.push(Error::new(span, "expected assignment `=`"));
                None
            }
        }
    }
}

fn is_comma(tt: &TokenTree) -> bool {
    matches!(tt, TokenTree::Punct(p) if p.as_char() == ',')
}

/// A parser for the item annotated with an entry macro.
pub(crate) struct ItemParser {
    it: token_stream::IntoIter,
}

impl ItemParser {
    /// Construct a new parser around the given token stream.
    pub(crate) fn new(stream: TokenStream) -> Self {
        Self {
            it: stream.into_iter(),
        }
    }

    /// Find the name of the annotated function.
    pub(crate) fn parse(self) -> Option<Ident> {
        let mut next_is_name = false;

        for tt in self.it {
            let TokenTree::Ident(ident) = tt else {
                next_is_name = false;
                continue;
            };

            if next_is_name {
                return Some(ident);
            }

            next_is_name = ident.to_string() == "fn";
        }

        None
    }
}

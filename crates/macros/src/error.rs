use proc_macro::{Delimiter, Group, Ident, Literal, Punct, Spacing, Span, TokenStream, TokenTree};

/// An error raised while expanding a macro.
pub(crate) struct Error {
    span: Span,
    message: String,
}

impl Error {
    pub(crate) fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// Write the error as a `compile_error!` invocation.
    pub(crate) fn write_to(self, stream: &mut TokenStream) {
        let mut bang = Punct::new('!', Spacing::Alone);
        bang.set_span(self.span);

        let mut message = Literal::string(&self.message);
        message.set_span(self.span);

        let mut args = Group::new(Delimiter::Parenthesis, TokenTree::Literal(message).into());
        args.set_span(self.span);

        let mut semi = Punct::new(';', Spacing::Alone);
        semi.set_span(self.span);

        stream.extend([
            TokenTree::Ident(Ident::new("compile_error", self.span)),
            TokenTree::Punct(bang),
            TokenTree::Group(args),
            TokenTree::Punct(semi),
        ]);
    }
}

use super::token::{Token, TokenStream};

/// Splits one line of LISP-style text into parentheses and atoms
///
/// Parentheses are self-delimiting: each `(` and `)` is padded with spaces and
/// the padded text is split on runs of whitespace. There is no quoting, no
/// escaping and no string literal awareness, so an atom can never contain a
/// parenthesis. Every input is valid.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    /// Source line being tokenized
    source: &'a str,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over the given source text
    pub fn new(source: &'a str) -> Self {
        Tokenizer { source }
    }

    /// The borrowed source text
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Produces the token stream for the source text
    pub fn tokens(&self) -> TokenStream {
        let padded = self.source.replace('(', " ( ").replace(')', " ) ");
        let tokens: TokenStream = padded.split_whitespace().map(Token::from).collect();

        tracing::trace!(
            tokens = tokens.len(),
            balance = tokens.depth_balance(),
            "tokenized line"
        );
        tokens
    }
}

/// Tokenizes a line of text
pub fn tokenize(source: &str) -> TokenStream {
    Tokenizer::new(source).tokens()
}

/// Same transform as [`tokenize`]
///
/// Kept under the name the language front end has always used. It does not
/// build a tree.
pub fn parse(source: &str) -> TokenStream {
    tokenize(source)
}

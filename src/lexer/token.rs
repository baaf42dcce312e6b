use serde::Serialize;
use std::fmt;
use std::ops::Index;

/// A single token from one line of source text
///
/// Either a lone parenthesis or an atom: a maximal run of characters that are
/// neither whitespace nor parentheses. Tokens carry no further type; `10` and
/// `define` are both just text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Original text of the token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the token text in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for tokens produced by the tokenizer
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True for `(`
    pub fn is_left_paren(&self) -> bool {
        self.0 == "("
    }

    /// True for `)`
    pub fn is_right_paren(&self) -> bool {
        self.0 == ")"
    }

    /// True for either parenthesis
    pub fn is_paren(&self) -> bool {
        self.is_left_paren() || self.is_right_paren()
    }

    /// True for anything that is not a parenthesis
    pub fn is_atom(&self) -> bool {
        !self.is_paren()
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token(text.to_string())
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Token(text)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The ordered tokens of one input line, in left-to-right source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenStream(Vec<Token>);

impl TokenStream {
    /// Number of tokens
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the line held nothing but whitespace
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the tokens in order
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    /// Borrows the tokens as a slice
    pub fn as_slice(&self) -> &[Token] {
        &self.0
    }

    /// Consumes the stream, returning the token vector
    pub fn into_vec(self) -> Vec<Token> {
        self.0
    }

    /// Token texts as borrowed strings, handy for comparisons
    pub fn texts(&self) -> Vec<&str> {
        self.0.iter().map(Token::as_str).collect()
    }

    /// Count of `(` minus count of `)`
    ///
    /// Informational only: unbalanced input is still a valid stream.
    pub fn depth_balance(&self) -> i64 {
        self.0.iter().fold(0, |depth, token| {
            if token.is_left_paren() {
                depth + 1
            } else if token.is_right_paren() {
                depth - 1
            } else {
                depth
            }
        })
    }
}

impl fmt::Display for TokenStream {
    /// Tokens joined by a single space
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.0[index]
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenStream(iter.into_iter().collect())
    }
}

//! Lexical analysis for Crisp
//!
//! Converts one line of source text into a stream of parenthesis and atom tokens.

mod token;
mod tokenizer;

pub use token::{Token, TokenStream};
pub use tokenizer::{parse, tokenize, Tokenizer};

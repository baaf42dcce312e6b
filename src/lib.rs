//! # Crisp - an interactive tokenizer for a small LISP dialect
//!
//! Crisp reads one line at a time, splits it into parenthesis and atom tokens,
//! and echoes the token stream back. There is no reader, no evaluator and no
//! notion of numbers or strings: a token is just text.
//!
//! ## Quick Start
//!
//! ```rust
//! use crisp::tokenize;
//!
//! let tokens = tokenize("(define x 10)");
//! assert_eq!(tokens.texts(), vec!["(", "define", "x", "10", ")"]);
//!
//! // Parentheses always stand alone, whitespace width is forgotten
//! assert_eq!(tokenize("(+   1(* 2 3))").to_string(), "( + 1 ( * 2 3 ) )");
//!
//! // Nothing is ever an error
//! assert!(tokenize("   ").is_empty());
//! assert_eq!(tokenize(")(").len(), 2);
//! ```
//!
//! ### Running a session
//!
//! ```rust
//! use crisp::{Repl, ReplConfig};
//! use std::io::Cursor;
//!
//! # fn main() -> crisp::Result<()> {
//! let input = Cursor::new("(+ 1 2)\n(quit)\n");
//! let mut output = Vec::new();
//!
//! let echoed = Repl::new(ReplConfig::default(), input, &mut output).run()?;
//!
//! assert_eq!(echoed, 1);
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "crisp >>       >> ( + 1 2 )\ncrisp >> "
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! stdin → Repl → Tokenizer → TokenStream → render → stdout
//! ```
//!
//! - [`Tokenizer`] - pure text to token transform
//! - [`TokenStream`] - ordered tokens of one line
//! - [`Repl`] - prompt/read/echo loop with a typed [`Control`] result per line
//! - [`cli`] - argument handling for the `crisp` binary

/// Version of the Crisp front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod error;
pub mod lexer;
pub mod repl;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{parse, tokenize, Token, TokenStream, Tokenizer};
pub use repl::{Control, OutputFormat, Outcome, Repl, ReplConfig};

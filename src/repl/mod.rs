//! Host loop for Crisp: prompt, read a line, echo its tokens
//!
//! The tokenizer itself never does I/O; everything that touches a reader or a
//! writer lives here.

mod config;
mod render;
mod session;

pub use config::{ReplConfig, DEFAULT_OUTPUT_PROMPT, DEFAULT_PROMPT, DEFAULT_QUIT_SENTINEL};
pub use render::{render, OutputFormat};
pub use session::{echo_once, evaluate_line, run_batch, Control, Outcome, Repl};

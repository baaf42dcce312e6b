use std::fmt;
use std::str::FromStr;

use super::config::ReplConfig;
use crate::error::{Error, Result};
use crate::lexer::TokenStream;

/// How an echoed token stream is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tokens joined by a single space
    #[default]
    Plain,
    /// Tokens as a JSON array of strings
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::invalid_argument(
                "format",
                format!("expected `plain` or `json`, got `{}`", other),
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Renders one echo line (without trailing newline)
pub fn render(config: &ReplConfig, tokens: &TokenStream) -> Result<String> {
    let body = match config.format {
        OutputFormat::Plain => tokens.to_string(),
        OutputFormat::Json => serde_json::to_string(tokens)?,
    };
    Ok(format!("{}{}", config.output_prompt, body))
}

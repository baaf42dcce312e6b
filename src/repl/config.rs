use super::render::OutputFormat;

/// Prompt shown before each input line
pub const DEFAULT_PROMPT: &str = "crisp >> ";

/// Prefix written before each echoed token stream
pub const DEFAULT_OUTPUT_PROMPT: &str = "      >> ";

/// Input line that ends a session
pub const DEFAULT_QUIT_SENTINEL: &str = "(quit)";

/// Settings for an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Written (without newline) before each line is read
    pub prompt: String,
    /// Prefix of every echo line
    pub output_prompt: String,
    /// A line exactly equal to this ends the session without being tokenized
    pub quit_sentinel: String,
    /// How echoed token streams are rendered
    pub format: OutputFormat,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            output_prompt: DEFAULT_OUTPUT_PROMPT.to_string(),
            quit_sentinel: DEFAULT_QUIT_SENTINEL.to_string(),
            format: OutputFormat::Plain,
        }
    }
}

impl ReplConfig {
    /// Default settings with the given output format
    pub fn with_format(format: OutputFormat) -> Self {
        ReplConfig {
            format,
            ..ReplConfig::default()
        }
    }

    /// Exact, case-sensitive comparison against the quit sentinel
    pub fn is_quit(&self, line: &str) -> bool {
        line == self.quit_sentinel
    }
}

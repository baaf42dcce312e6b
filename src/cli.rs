//! Command-line arguments for the `crisp` binary

use std::path::PathBuf;

use clap::Parser;

use crate::repl::OutputFormat;

/// Crisp - tokenize LISP expressions and echo the tokens back
#[derive(Parser, Debug)]
#[command(name = "crisp", version, about)]
pub struct ProgramArguments {
    /// Interactive mode (the default when no other mode is given)
    #[arg(short, long)]
    pub interactive: bool,

    /// Tokenize a single expression given on the command line
    #[arg(short, long, value_name = "TEXT")]
    pub command_line: Option<String>,

    /// Tokenize each line of a file
    #[arg(short, long, value_name = "PATH")]
    pub filename: Option<PathBuf>,

    /// Echo format: plain or json
    #[arg(long, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Log filter directive, overridden by RUST_LOG when set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// The mode the binary runs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Prompt on stdin until the sentinel or end of input
    Interactive,
    /// Echo one expression and exit
    CommandLine(String),
    /// Echo every line of a file
    File(PathBuf),
}

impl ProgramArguments {
    /// Resolves the mode: interactive, then command line, then file, then interactive
    pub fn mode(&self) -> Mode {
        if self.interactive {
            return Mode::Interactive;
        }
        if let Some(text) = &self.command_line {
            return Mode::CommandLine(text.clone());
        }
        if let Some(path) = &self.filename {
            return Mode::File(path.clone());
        }
        Mode::Interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> ProgramArguments {
        ProgramArguments::try_parse_from(std::iter::once("crisp").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_default_is_interactive() {
        let parsed = args(&[]);
        assert_eq!(parsed.mode(), Mode::Interactive);
        assert_eq!(parsed.format, OutputFormat::Plain);
        assert_eq!(parsed.log_level, "warn");
    }

    #[test]
    fn test_command_line_mode() {
        let parsed = args(&["-c", "(+ 1 2)"]);
        assert_eq!(parsed.mode(), Mode::CommandLine("(+ 1 2)".to_string()));
    }

    #[test]
    fn test_interactive_takes_precedence() {
        let parsed = args(&["-i", "-c", "(x)", "-f", "prog.lisp"]);
        assert_eq!(parsed.mode(), Mode::Interactive);
    }

    #[test]
    fn test_command_line_before_file() {
        let parsed = args(&["--filename", "prog.lisp", "--command-line", "(x)"]);
        assert_eq!(parsed.mode(), Mode::CommandLine("(x)".to_string()));

        let parsed = args(&["-f", "prog.lisp"]);
        assert_eq!(parsed.mode(), Mode::File(PathBuf::from("prog.lisp")));
    }

    #[test]
    fn test_format_flag() {
        assert_eq!(args(&["--format", "json"]).format, OutputFormat::Json);
        assert!(ProgramArguments::try_parse_from(["crisp", "--format", "xml"]).is_err());
    }
}

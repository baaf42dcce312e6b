use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crisp::cli::{Mode, ProgramArguments};
use crisp::repl::{echo_once, run_batch, Repl, ReplConfig};

fn main() -> Result<()> {
    let args = ProgramArguments::parse();

    // Logs go to stderr so stdout carries only prompts and echoes
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .with_context(|| format!("invalid log level `{}`", args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Starting crisp v{}", crisp::VERSION);

    let config = ReplConfig::with_format(args.format);
    match args.mode() {
        Mode::Interactive => {
            debug!("interactive mode");
            let stdin = io::stdin();
            let stdout = io::stdout();
            Repl::new(config, stdin.lock(), stdout.lock()).run()?;
        }
        Mode::CommandLine(text) => {
            debug!("command-line mode");
            echo_once(&config, &text, io::stdout().lock())?;
        }
        Mode::File(path) => {
            debug!(path = %path.display(), "file mode");
            let file = File::open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let echoed = run_batch(&config, BufReader::new(file), io::stdout().lock())
                .with_context(|| format!("failed to read {}", path.display()))?;
            info!(echoed, "file done");
        }
    }

    Ok(())
}

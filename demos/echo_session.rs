//! Echo session over stdin, without the command-line front end
//!
//! Usage: cargo run --example echo_session

use crisp::{Control, OutputFormat, Repl, ReplConfig};
use std::io;

fn main() -> crisp::Result<()> {
    println!("crisp v{} - type (quit) to leave", crisp::VERSION);

    let format = match std::env::args().nth(1) {
        Some(name) => name.parse()?,
        None => OutputFormat::Plain,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(ReplConfig::with_format(format), stdin.lock(), stdout.lock());

    while repl.step()? == Control::Continue {}

    println!("echoed {} line(s)", repl.echoed());
    Ok(())
}

//! Blocking read-eval loop.

use std::io::{self, BufRead, Write};

use jtap_chain::Chain;
use jtap_console::{CommandOutput, CommandRegistry};
use jtap_types::error::Result;

/// Run the console loop until `quit` or end of input.
///
/// Command failures are reported and the loop continues; only I/O errors
/// on the console itself end it early.
pub fn run(registry: &CommandRegistry, chain: &mut Chain, prompt: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match dispatch_line(registry, chain, &line) {
            Ok(CommandOutput::Text(text)) => writeln!(stdout, "{text}")?,
            Ok(CommandOutput::None) => {},
            Ok(CommandOutput::Quit) => break,
            Err(e) => log::error!("{e}"),
        }
    }

    Ok(())
}

/// Tokenize one submitted line on whitespace and dispatch it.
pub fn dispatch_line(
    registry: &CommandRegistry,
    chain: &mut Chain,
    line: &str,
) -> Result<CommandOutput> {
    let args: Vec<&str> = line.split_ascii_whitespace().collect();
    registry.run(chain, &args)
}

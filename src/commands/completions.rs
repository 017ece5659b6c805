//! Completions command - print a shell completion script

use crate::{PixrError, cli::Cli};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

type Result<T> = std::result::Result<T, PixrError>;

/// Write the completion script for `shell` to `out`
///
/// # Errors
/// Returns an error if writing fails.
pub fn execute(shell: Shell, out: &mut dyn Write) -> Result<()> {
    clap_complete::generate(shell, &mut Cli::command(), "pixr", out);
    out.flush()?;
    Ok(())
}

//! Output formatting module
//!
//! Message helpers shared by the shell. Every helper writes to the given
//! writer so the shell can be driven against in-memory buffers.

use colored::Colorize;
use std::io::{self, Write};

/// Print a success message in green
pub fn print_success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.green())
}

/// Print an error message in red
pub fn print_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.red())
}

/// Print a plain informational line
pub fn print_info<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message)
}

/// Print a prompt without a trailing newline and flush it
pub fn print_prompt<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    write!(out, "{}", label)?;
    out.flush()
}

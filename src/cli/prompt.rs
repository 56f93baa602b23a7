//! Interactive prompt for editing a task description.

use std::io::{BufRead, Write};

use crate::core::EditOutcome;

/// Ask for a new description, showing the current one.
///
/// An empty line or end of input cancels the edit.
///
/// # Errors
///
/// Returns an error if reading or writing the terminal fails.
pub fn prompt_edit<R: BufRead, W: Write>(
    current: &str,
    mut input: R,
    mut output: W,
) -> std::io::Result<EditOutcome> {
    writeln!(output, "Current: {current}")?;
    write!(output, "New description (empty to cancel): ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(EditOutcome::Cancelled);
    }

    let line = line.trim_end_matches(['\r', '\n']);
    Ok(EditOutcome::from_input(Some(line)))
}

// ⌨️ Interactive Session - Line-oriented registration loop
// Reads last/first name pairs until "quit" (or end of input), then lists everyone.

use crate::registry::Registry;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Sentinel typed at the last-name prompt to stop (case-insensitive)
pub const QUIT: &str = "quit";

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the prompt loop against any reader/writer pair
pub fn run_session<R: BufRead, W: Write>(registry: &mut Registry, mut input: R, mut output: W) -> Result<()> {
    loop {
        let last = match prompt(&mut input, &mut output, "Enter last name (or 'quit' to exit): ")? {
            Some(last) => last,
            None => break,
        };
        if last.eq_ignore_ascii_case(QUIT) {
            break;
        }

        let first = match prompt(&mut input, &mut output, "Enter first name: ")? {
            Some(first) => first,
            None => break,
        };

        let reg = registry.generate_registration_number(&last, &first);
        writeln!(output, "Registration number: {}", reg)?;
    }

    print_summary(registry, &mut output)
}

/// List every registered student as "{last} {first} -> {code}"
pub fn print_summary<W: Write>(registry: &Registry, output: &mut W) -> Result<()> {
    if registry.is_empty() {
        return Ok(());
    }

    writeln!(output)?;
    writeln!(output, "All registered students:")?;
    for record in registry.records() {
        writeln!(output, "{} {} -> {}", record.last_name, record.first_name, record.code)?;
    }
    Ok(())
}

//! Small rustyline-based form helpers shared by the auth commands.

use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;

/// Reads a single line under the given label.
pub fn line(rl: &mut DefaultEditor, label: &str) -> Result<String> {
    let value = rl.readline(&format!("{label}: "))?;
    Ok(value.trim().to_string())
}

/// Reads a single line, falling back to `default` on empty input.
pub fn line_with_default(rl: &mut DefaultEditor, label: &str, default: &str) -> Result<String> {
    let value = rl.readline(&format!("{label} [{default}]: "))?;
    let value = value.trim();
    Ok(if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    })
}

/// Presents a numbered list and reads a selection. Empty input or an
/// out-of-range number yields `None`.
pub fn select(rl: &mut DefaultEditor, label: &str, options: &[&str]) -> Result<Option<String>> {
    println!("{}", label.bold());
    for (index, option) in options.iter().enumerate() {
        println!("  {:>2}. {}", index + 1, option);
    }
    let value = rl.readline("Opción (número): ")?;
    let choice = value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=options.len()).contains(n))
        .map(|n| options[n - 1].to_string());
    Ok(choice)
}

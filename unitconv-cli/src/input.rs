//! Numeric input: positional arguments or standard input

use std::io::BufRead;
use unitconv_core::ConversionError;

use crate::CliError;

/// Parse one number. Rejected input becomes `InvalidNumber`.
pub fn parse_value(raw: &str) -> Result<f64, ConversionError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| ConversionError::invalid_number(raw, e))
}

/// Parse every value up front so a bad one aborts before any output
pub fn parse_values<S: AsRef<str>>(raw: &[S]) -> Result<Vec<f64>, ConversionError> {
    raw.iter().map(|s| parse_value(s.as_ref())).collect()
}

/// One value per non-blank line of `reader`, surrounding whitespace removed
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, CliError> {
    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            values.push(line.to_string());
        }
    }
    Ok(values)
}

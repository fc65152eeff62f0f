//! Delimiter argument parsing

use crate::error::CliError;

/// Interpret backslash escapes in a delimiter given on the command line
///
/// Supported: `\n`, `\r`, `\t`, `\0` and `\\`.
pub fn unescape_delimiter(raw: &str) -> Result<String, CliError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                return Err(CliError::InvalidDelimiter(format!(
                    "unknown escape \\{other}"
                )))
            }
            None => {
                return Err(CliError::InvalidDelimiter(
                    "trailing backslash".to_string(),
                ))
            }
        }
    }

    Ok(out)
}

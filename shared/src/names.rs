/// Splits raw textarea input into wheel entries.
///
/// One name per line (`\n` or `\r\n`), each trimmed; blank lines are
/// dropped and order is preserved. Duplicates are kept as separate
/// entries.
pub fn parse_names(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated watchlist into symbols.
///
/// Whitespace is trimmed, empty entries are dropped, and only the first
/// occurrence of a repeated symbol is kept.
pub fn parse_watchlist(input: &str) -> Vec<String> {
    let mut symbols: Vec<String> = Vec::new();
    for symbol in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !symbols.iter().any(|s| s == symbol) {
            symbols.push(symbol.to_string());
        }
    }
    symbols
}

/// Maximum number of tokens kept from one input line.
pub const MAX_ARGS: usize = 127;

/// Splits a command line into whitespace separated arguments.
///
/// No quoting or escaping: tokens are returned verbatim and in order. Blank
/// input yields an empty vector. Tokens past [`MAX_ARGS`] are dropped.
pub fn tokenize(line: &str) -> Vec<String> {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut words = line.split_whitespace();
    let args: Vec<String> = words.by_ref().take(MAX_ARGS).map(String::from).collect();

    let dropped = words.count();
    if dropped > 0 {
        log::debug!("truncated {} argument(s) past the limit of {}", dropped, MAX_ARGS);
    }

    args
}

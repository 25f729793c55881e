//! Query tokenization for catalog search

use std::sync::LazyLock;

use regex::Regex;

// Cleanup passes applied before splitting into tokens
static TITLE_CLEANUPS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // Bracketed edition/format noise: (2010), [Omnibus], {paperback} ...
        (
            r"(?i)[(\[{](\d{4}|omnibus|anthology|hardcover|audiobook|paperback|mass\s*market|edition|ed\.)[)\]}]",
            "",
        ),
        // Anything bracketed that mentions an edition
        (r"(?i)[(\[{][^)\]}]*?(edition|ed\.)[^)\]}]*?[)\]}]", ""),
        // Commas used as separators in numbers
        (r"(\d+),(\d+)", "${1}${2}"),
        // Hyphens preceded by whitespace
        (r"\s-", " "),
        // Remaining punctuation becomes a space
        (r#"[:,;!@$%^&*(){}.`~"\[\]/《》「」“”]"#, " "),
    ]
    .into_iter()
    .map(|(pattern, repl)| (Regex::new(pattern).unwrap(), repl))
    .collect()
});

const JOINERS: [&str; 4] = ["a", "and", "the", "&"];

/// Split a free-text title query into search tokens.
///
/// Bracketed edition markers and most punctuation are removed first. When
/// `strip_joiners` is set, common English joiner words are dropped as well.
/// May return an empty list, in which case callers should fall back to the
/// raw query.
pub fn title_tokens(title: &str, strip_joiners: bool) -> Vec<String> {
    let mut cleaned = title.to_string();
    for (pattern, repl) in TITLE_CLEANUPS.iter() {
        cleaned = pattern.replace_all(&cleaned, *repl).to_string();
    }

    cleaned
        .split_whitespace()
        .map(|token| token.trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|token| !token.is_empty())
        .filter(|token| !strip_joiners || !JOINERS.contains(&token.to_lowercase().as_str()))
        .collect()
}

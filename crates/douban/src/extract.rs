use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use crate::models::Book;

/// What to do with an info-block node once its label matched.
#[derive(Debug, Clone, Copy)]
enum FieldRule {
    /// Walk element siblings after the label, collecting each one's text as
    /// an author name, stopping at the first `<br>`.
    Authors,
    /// Tail text after the label, trimmed.
    Publisher,
    /// Tail text appended to the title as `"<title>:<subtitle>"`.
    Subtitle,
    /// Tail text, stored verbatim (no date parsing).
    PublishedDate,
    /// Text of the next element sibling.
    Series,
    /// Tail text keyed by the matched label text, e.g. "ISBN" or "统一书号".
    Identifier,
}

/// Label patterns in priority order; the first match per node decides the
/// rule, remaining patterns are not tried.
static INFO_RULES: LazyLock<Vec<(Regex, FieldRule)>> = LazyLock::new(|| {
    [
        (r"作者|译者", FieldRule::Authors),
        (r"出版社", FieldRule::Publisher),
        (r"副标题", FieldRule::Subtitle),
        (r"出版年", FieldRule::PublishedDate),
        (r"丛书", FieldRule::Series),
        (r"ISBN|统一书号", FieldRule::Identifier),
    ]
    .into_iter()
    .map(|(pattern, rule)| (Regex::new(pattern).unwrap(), rule))
    .collect()
});

/// Populate label-driven fields from the detail page's info block.
///
/// Extraction of any single field is best-effort: a missing sibling or
/// missing tail text skips that field only, never the whole record. Nodes
/// whose label matches no pattern are ignored.
pub(crate) fn apply_info_rules<'a>(
    labels: impl Iterator<Item = ElementRef<'a>>,
    book: &mut Book,
) {
    for label in labels {
        let text: String = label.text().collect();
        let Some((rule, matched)) = classify(&text) else {
            continue;
        };
        apply_rule(rule, &matched, label, book);
    }
}

fn classify(label: &str) -> Option<(FieldRule, String)> {
    INFO_RULES
        .iter()
        .find_map(|(pattern, rule)| pattern.find(label).map(|m| (*rule, m.as_str().to_string())))
}

fn apply_rule(rule: FieldRule, matched: &str, label: ElementRef, book: &mut Book) {
    match rule {
        FieldRule::Authors => {
            for sibling in label.next_siblings().filter_map(ElementRef::wrap) {
                if sibling.value().name() == "br" {
                    break;
                }
                let name = sibling.text().collect::<String>().trim().to_string();
                if !name.is_empty() {
                    book.authors.push(name);
                }
            }
        }
        FieldRule::Publisher => {
            if let Some(tail) = tail_text(label) {
                book.publisher = Some(tail);
            }
        }
        FieldRule::Subtitle => {
            if let Some(tail) = tail_text(label) {
                book.title = format!("{}:{}", book.title, tail);
            }
        }
        FieldRule::PublishedDate => {
            if let Some(tail) = tail_text(label) {
                book.published_date = Some(tail);
            }
        }
        FieldRule::Series => {
            let next = label.next_siblings().filter_map(ElementRef::wrap).next();
            if let Some(next) = next {
                let name = next.text().collect::<String>().trim().to_string();
                if !name.is_empty() {
                    book.series = Some(name);
                }
            }
        }
        FieldRule::Identifier => {
            if let Some(tail) = tail_text(label) {
                // Same label seen again overwrites; distinct labels accumulate
                book.identifiers.insert(matched.to_string(), tail);
            }
        }
    }
}

/// Text directly following the label element on the same line: the run of
/// text-node siblings up to the next element. `None` when empty after
/// trimming.
fn tail_text(label: ElementRef) -> Option<String> {
    let mut tail = String::new();
    for sibling in label.next_siblings() {
        match sibling.value().as_text() {
            Some(text) => tail.push_str(text),
            None => break,
        }
    }
    let tail = tail.trim();
    (!tail.is_empty()).then(|| tail.to_string())
}

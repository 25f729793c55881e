use scraper::ElementRef;

/// Flatten an HTML fragment into normalized plain text.
///
/// No width wrapping is applied. `<br>` and block-element boundaries become
/// single line breaks, emphasis content is wrapped in `*`, and whitespace
/// runs inside a line are collapsed.
pub(crate) fn render_fragment(el: ElementRef) -> String {
    let mut raw = String::new();
    render_children(el, &mut raw);

    let lines: Vec<String> = raw
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect();
    lines.join("\n")
}

fn render_children(el: ElementRef, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            match child_el.value().name() {
                "br" => out.push('\n'),
                "script" | "style" => {}
                name => {
                    let emphasis = matches!(name, "em" | "i" | "strong" | "b");
                    if emphasis {
                        out.push('*');
                    }
                    render_children(child_el, out);
                    if emphasis {
                        out.push('*');
                    }
                    if is_block(name) {
                        out.push('\n');
                    }
                }
            }
        }
    }
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "p" | "div" | "li" | "ul" | "ol" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "blockquote"
    )
}

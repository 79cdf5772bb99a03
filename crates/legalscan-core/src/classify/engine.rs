use super::domain::determine_domain;
use super::extract::{extract_decision, extract_flow, extract_impact, extract_structure};
use crate::model::LegalElement;

/// Split text into lines, accepting `\n`, `\r\n`, `\r` and the Unicode
/// line separators. Line terminators are removed; a trailing terminator does
/// not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let is_break = matches!(
            c,
            '\n' | '\r'
                | '\u{0B}'
                | '\u{0C}'
                | '\u{1C}'
                | '\u{1D}'
                | '\u{1E}'
                | '\u{85}'
                | '\u{2028}'
                | '\u{2029}'
        );
        if !is_break {
            continue;
        }
        lines.push(&text[start..idx]);
        let mut next = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                next += 1;
            }
        }
        start = next;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Extract every element from one document.
///
/// Structure, flow, decision and impact run in that order; within a category
/// elements follow line order, and within a line pattern order. Holds no
/// state between calls.
pub fn extract(source_id: &str, text: &str) -> Vec<LegalElement> {
    let lines = split_lines(text);
    let domain = determine_domain(text);

    let mut elements = extract_structure(source_id, &lines, domain);
    elements.extend(extract_flow(source_id, &lines, domain));
    elements.extend(extract_decision(source_id, &lines, domain));
    elements.extend(extract_impact(source_id, &lines, domain));

    tracing::debug!(
        source_id,
        %domain,
        lines = lines.len(),
        elements = elements.len(),
        "extracted elements"
    );
    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn test_split_lines_conventions() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\u{2028}b"), vec!["a", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_category_order() {
        let text = "a fine applies\nThe court finds\nparties shall pay\nARTICLE II";
        let els = extract("doc", text);
        let cats: Vec<Category> = els.iter().map(|e| e.category_symbol).collect();
        assert_eq!(
            cats,
            vec![Category::Structure, Category::Flow, Category::Decision, Category::Impact]
        );
        assert_eq!(els[0].line_start, 4);
        assert_eq!(els[3].line_start, 1);
    }

    #[test]
    fn test_domain_shared_by_all_elements() {
        let text = "The defendant shall appear.\nThe court finds the defendant guilty.\nSentence: imprisonment.";
        let els = extract("case", text);
        assert!(els.len() >= 3);
        let domain = els[0].legal_domain;
        assert!(els.iter().all(|e| e.legal_domain == domain));
    }

    #[test]
    fn test_empty_text() {
        assert!(extract("empty", "").is_empty());
    }
}

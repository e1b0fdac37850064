//! Placeholder substitution for markup templates.
//!
//! Templates carry placeholders of the exact form `{{ name }}` (one space on
//! each side). `render` merges a field map into a template; it performs no
//! HTML escaping — callers sanitize untrusted field values first, `escape`
//! is provided for that.

use std::collections::BTreeMap;

/// Substitute fields into a template.
///
/// For each field, only the **first** literal occurrence of `{{ key }}` is
/// replaced; later occurrences of the same placeholder are left untouched.
/// This is a known limitation of the substitution scheme, kept as-is because
/// existing templates rely on each placeholder appearing once.
///
/// Fields without a matching placeholder are ignored; placeholders without a
/// matching field remain verbatim. The template itself is never mutated, so
/// the same template can be rendered repeatedly.
pub fn render(template: &str, fields: &BTreeMap<String, String>) -> String {
    let mut out = template.to_string();

    for (key, value) in fields {
        let placeholder = format!("{{{{ {key} }}}}");

        if let Some(at) = out.find(&placeholder) {
            out.replace_range(at..at + placeholder.len(), value);
        }
    }

    out
}

/// Escape HTML special characters in text.
///
/// Not applied by `render`; use this on untrusted field values before
/// putting them in a field map.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_fields() {
        let out = render(
            "<h2>{{ title }}</h2><p>{{ body }}</p>",
            &fields(&[("title", "Hello"), ("body", "World")]),
        );
        assert_eq!(out, "<h2>Hello</h2><p>World</p>");
    }

    #[test]
    fn only_first_occurrence() {
        let out = render("{{ a }} {{ a }}", &fields(&[("a", "x")]));
        assert_eq!(out, "x {{ a }}");
    }

    #[test]
    fn unmatched_placeholder_remains() {
        let out = render("{{ title }} {{ missing }}", &fields(&[("title", "T")]));
        assert_eq!(out, "T {{ missing }}");
    }

    #[test]
    fn unmatched_field_is_ignored() {
        let out = render("plain", &fields(&[("title", "T")]));
        assert_eq!(out, "plain");
    }

    #[test]
    fn no_escaping_is_performed() {
        let out = render("{{ body }}", &fields(&[("body", "<script>")]));
        assert_eq!(out, "<script>");
    }

    #[test]
    fn template_is_reusable() {
        let template = "{{ a }}";
        let first = render(template, &fields(&[("a", "1")]));
        let second = render(template, &fields(&[("a", "2")]));
        assert_eq!(first, "1");
        assert_eq!(second, "2");
    }

    #[test]
    fn escape_html() {
        assert_eq!(
            escape("<a href=\"x\">&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }
}

//! `{field}` placeholder substitution for row templates.

/// Replaces every `{name}` placeholder using `lookup`.
///
/// A placeholder name consists of ASCII alphanumerics, `_`, `-` and `.`.
/// Braces around anything else (CSS blocks, JSON) are copied unchanged.
/// Names for which `lookup` returns `None` render as an empty string.
pub fn substitute<F>(template: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_placeholder(&after[..close]) => {
                if let Some(value) = lookup(&after[..close]) {
                    out.push_str(&value);
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn is_placeholder(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

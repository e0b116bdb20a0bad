const WINDOW: usize = 33;

/// Renders the head of some input for a trace column: escaped, truncated
/// and padded so successive lines align.
pub fn formatter_str(c: &str) -> String {
    let s: String = c.chars().take(WINDOW).collect();
    let s = s.escape_default().to_string();
    let s = s.replace("\\\"", "\"");
    let s = s.replace("\\\'", "\'");
    let s: String = s.chars().take(WINDOW).collect();
    format!("{:<35}", "|".to_string() + &s + "|")
}

#[cfg_attr(not(feature = "strum"), allow(dead_code))]
pub(crate) fn type_suffix(type_name: &str) -> &str {
    if let Some(i) = type_name.rfind("::") {
        &type_name[i + 2..]
    } else {
        type_name
    }
}

/// Quotes a list of labels or choices for use inside a label.
pub(crate) fn join_labels<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

//! Small text helpers shared by the model list and the tweet history.

/// True when any of `fields` contains `query`, ignoring case. An empty query matches.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    let q = query.trim().to_lowercase();
    q.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&q))
}

/// Keep the items whose fields match `query` (see [`matches_query`]), in order.
pub fn filter_by_query<'a, T, const N: usize>(
    items: &'a [T],
    query: &str,
    fields: impl Fn(&T) -> [&str; N],
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches_query(&fields(*item), query))
        .collect()
}

/// Collapse `s` to one line and cut it to at most `max_chars`, ending with `…` when cut.
pub fn one_line_preview(s: &str, max_chars: usize) -> String {
    let line = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.chars().count() <= max_chars {
        return line;
    }
    let mut out: String = line.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

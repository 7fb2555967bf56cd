/// Escapes text for insertion into markup.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entities. Not idempotent:
/// escaping already-escaped text double-escapes, so callers escape exactly
/// once at the point of insertion.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

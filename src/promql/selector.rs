//! Selector clause rendering.

/// Render label-matcher fragments as a `{...}` selector clause.
///
/// Fragments are joined with `,` in the order given. Nothing is trimmed,
/// escaped or deduplicated, and an empty list still renders as `{}`.
pub fn render_selectors<S: AsRef<str>>(fragments: &[S]) -> String {
    let mut out = String::from("{");
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(fragment.as_ref());
    }
    out.push('}');
    out
}

//! Conditional CSS class composition.

/// Joins the non-blank class fragments with single spaces, in order.
///
/// Blank fragments stand in for "no class", which keeps conditionals inline:
///
/// ```rust,ignore
/// class_names(["btn", if active { "btn-active" } else { "" }])
/// ```
pub fn class_names<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

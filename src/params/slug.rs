use std::collections::HashSet;

/// URL-friendly slug derived from a parameter name: lowercase, runs of
/// non-alphanumeric characters collapse to a single `_`, trimmed of leading
/// and trailing `_`. Empty input falls back to `"parameter"`.
///
/// Slugs are always regenerated from the name; author-provided slugs are
/// ignored so name and slug cannot drift apart.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }
    if slug.is_empty() {
        "parameter".to_owned()
    } else {
        slug
    }
}

/// Uniques `base` against `taken` by appending `_1`, `_2`, ... and records
/// the winner in `taken`.
pub fn unique_slug(base: &str, taken: &mut HashSet<String>) -> String {
    let mut candidate = base.to_owned();
    let mut counter = 1;
    while taken.contains(&candidate) {
        candidate = format!("{base}_{counter}");
        counter += 1;
    }
    taken.insert(candidate.clone());
    candidate
}

use std::ops::Range;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use tracing::trace;

use crate::report::{Issue, IssueCode};

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z][A-Za-z0-9_]*)\s*\}\}").unwrap_or_else(|_| unreachable!())
});

static OPTIONAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[\[.*?\]\]").unwrap_or_else(|_| unreachable!()));

/// Result of scanning a native query body for `{{name}}` references and
/// `[[ ... ]]` optional blocks.
#[derive(Debug, Clone, Default)]
pub struct TagScan {
    /// Tag name -> whether every occurrence sits inside an optional block.
    occurrences: IndexMap<String, bool>,
    pub issues: Vec<Issue>,
}

impl TagScan {
    /// Unique tag names in order of first appearance.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.occurrences.keys().map(String::as_str)
    }

    #[must_use]
    pub fn references(&self, tag: &str) -> bool {
        self.occurrences.contains_key(tag)
    }

    /// `true` when the tag never appears outside an optional block.
    #[must_use]
    pub fn is_optional_only(&self, tag: &str) -> bool {
        self.occurrences.get(tag).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

/// Scans a SQL body for template tags and optional blocks.
///
/// Unbalanced `{{` / `[[` delimiters and tag names that are not
/// identifier-shaped surface as issues rather than silently vanishing.
#[must_use]
pub fn scan_template_tags(sql: &str) -> TagScan {
    let optional_spans: Vec<Range<usize>> = OPTIONAL_RE
        .find_iter(sql)
        .map(|found| found.range())
        .collect();

    let mut scan = TagScan::default();
    let mut matched_tags = 0;
    for capture in TAG_RE.captures_iter(sql) {
        matched_tags += 1;
        // Capture 0 always exists and group 1 is non-optional in the pattern.
        let Some(whole) = capture.get(0) else { continue };
        let Some(name) = capture.get(1) else { continue };
        let inside_optional = optional_spans
            .iter()
            .any(|span| span.start <= whole.start() && whole.end() <= span.end);
        scan.occurrences
            .entry(name.as_str().to_owned())
            .and_modify(|optional_only| *optional_only &= inside_optional)
            .or_insert(inside_optional);
    }

    let open_tags = sql.matches("{{").count();
    if open_tags != matched_tags {
        scan.issues.push(Issue::error(
            IssueCode::InvalidValue,
            "/sql",
            "query contains an unterminated or malformed {{...}} template tag",
        ));
    }

    let open_blocks = sql.matches("[[").count();
    if open_blocks != optional_spans.len() {
        scan.issues.push(Issue::error(
            IssueCode::InvalidValue,
            "/sql",
            "query contains an unterminated [[...]] optional block",
        ));
    }

    trace!(
        tag_count = scan.occurrences.len(),
        optional_blocks = optional_spans.len(),
        "scanned query for template tags"
    );
    scan
}

//! Match-field attribution.
//!
//! Given a query and a record, decide which named fields plausibly explain
//! why the record was retrieved. Pure and deterministic; used both for the
//! `matched_fields` payload of search results and for the deterministic
//! explanation fallback.

use std::collections::HashSet;

use crate::record::Founder;

/// Fields reported when nothing matched, so downstream explanation logic
/// always has at least one field to cite.
pub const DEFAULT_FIELDS: [&str; 2] = ["keywords", "about"];

/// Compute the set of field names that plausibly explain a (query, record)
/// match. Case-insensitive throughout; output order is fixed.
pub fn matched_fields(query: &str, founder: &Founder) -> Vec<&'static str> {
    let query_lower = query.to_lowercase();
    let mut matched = Vec::new();

    if founder
        .keyword_list()
        .iter()
        .any(|k| query_lower.contains(&k.to_lowercase()))
    {
        matched.push("keywords");
    }

    if contains_value(&query_lower, &founder.role) {
        matched.push("role");
    }

    if contains_value(&query_lower, &founder.company) {
        matched.push("company");
    }

    if location_matches(&query_lower, founder) {
        matched.push("location");
    }

    if contains_value(&query_lower, &founder.stage) {
        matched.push("stage");
    }

    let query_words: HashSet<&str> = query_lower.split_whitespace().collect();
    if words_overlap(&founder.about, &query_words) {
        matched.push("about");
    }
    if words_overlap(&founder.idea, &query_words) {
        matched.push("idea");
    }

    if matched.is_empty() {
        return DEFAULT_FIELDS.to_vec();
    }
    matched
}

/// Whether the whole location or any of its `", "`-separated parts appears
/// in the query.
pub fn location_matches(query_lower: &str, founder: &Founder) -> bool {
    contains_value(query_lower, &founder.location)
        || founder
            .location_parts()
            .iter()
            .any(|part| contains_value(query_lower, part))
}

fn contains_value(query_lower: &str, value: &str) -> bool {
    // An empty field value would be a substring of everything.
    !value.is_empty() && query_lower.contains(&value.to_lowercase())
}

fn words_overlap(text: &str, query_words: &HashSet<&str>) -> bool {
    text.to_lowercase()
        .split_whitespace()
        .any(|word| query_words.contains(word))
}

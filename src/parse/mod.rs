use crate::PublicationRecord;

mod matcher;
pub use matcher::match_affiliations;

/// Row-level filter: a record is usable only when both author
/// representations are present. Dropped rows are policy, not errors.
pub fn passes_filter(record: &PublicationRecord) -> bool {
    !record.authors.trim().is_empty() && !record.affiliations.trim().is_empty()
}

/// Split the primary author field into ordered tokens.
///
/// Tokens are trimmed but otherwise untouched: duplicates stay separate and
/// empty tokens are retained, so downstream code must tolerate both. The
/// comma delimiter can also separate a surname from an initial inside one
/// logical name, fragmenting that name into two tokens; that is the
/// documented matching contract, not something this function corrects.
pub fn split_authors(raw: &str) -> Vec<String> {
    raw.split(',').map(|token| token.trim().to_string()).collect()
}

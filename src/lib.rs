use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod build;
pub mod graph;
pub mod inspect;
pub mod parse;

/// One row of the source table. `year` is kept as the raw cell text;
/// `parse_year` decides how it appears in the output document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationRecord {
    pub title: String,
    pub year: String,
    pub authors: String,
    pub affiliations: String,
}

/// One affiliation-matcher hit: an author token together with the
/// attributes the matched entry contributes for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorAssociation {
    pub author: String,
    pub country: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Value>,
}

/// The Year column mixes integers and free text. Integer literals become
/// JSON numbers, anything else is carried verbatim, empty cells contribute
/// no attribute.
pub fn parse_year(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i64>() {
        Ok(n) => Some(Value::from(n)),
        Err(_) => Some(Value::from(trimmed)),
    }
}

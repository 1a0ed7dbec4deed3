use coauthor_graph::{parse, PublicationRecord};
use serde_json::Value;

fn record(authors: &str, affiliations: &str) -> PublicationRecord {
    PublicationRecord {
        title: "T1".to_string(),
        year: "2020".to_string(),
        authors: authors.to_string(),
        affiliations: affiliations.to_string(),
    }
}

#[test]
fn test_filter_drops_rows_missing_either_field() {
    assert!(parse::passes_filter(&record("Smith J.", "Smith J., MIT, USA")));
    assert!(!parse::passes_filter(&record("", "Smith J., MIT, USA")));
    assert!(!parse::passes_filter(&record("Smith J.", "")));
    assert!(!parse::passes_filter(&record("   ", "  ")));
}

#[test]
fn test_split_authors_preserves_order_duplicates_and_empties() {
    let tokens = parse::split_authors("Smith J., Doe A.,, Smith J.");
    assert_eq!(tokens, vec!["Smith J.", "Doe A.", "", "Smith J."]);
}

#[test]
fn test_split_authors_fragments_comma_separated_initials() {
    // The surname/initial comma is the same delimiter as the list comma,
    // so one logical author becomes two tokens. Specified behavior.
    let tokens = parse::split_authors("Smith, J., Doe, A.");
    assert_eq!(tokens, vec!["Smith", "J.", "Doe", "A."]);
}

#[test]
fn test_matcher_associates_entries_with_author_tokens() {
    let rec = record(
        "Smith J., Doe A.",
        "Smith J., Dept X, MIT, USA; Doe A., Dept Y, Oxford, UK",
    );
    let authors = parse::split_authors(&rec.authors);
    let associations = parse::match_affiliations(&rec, &authors);

    assert_eq!(associations.len(), 2);

    assert_eq!(associations[0].author, "Smith J.");
    assert_eq!(associations[0].country, "USA");
    assert_eq!(associations[0].title, "T1");
    assert_eq!(associations[0].year, Some(Value::from(2020)));

    assert_eq!(associations[1].author, "Doe A.");
    assert_eq!(associations[1].country, "UK");
}

#[test]
fn test_matcher_drops_entries_with_no_matching_author() {
    let rec = record("Smith J., Doe A.", "Zhang L., Dept Z, Tsinghua, China");
    let authors = parse::split_authors(&rec.authors);
    let associations = parse::match_affiliations(&rec, &authors);

    assert!(associations.is_empty());
}

#[test]
fn test_matcher_fans_out_to_every_matching_token() {
    // "Smith" occurs in both tokens, so one entry hits both.
    let rec = record("Smith J., Smith JA", "Smith, Dept X, MIT, USA");
    let authors = parse::split_authors(&rec.authors);
    let associations = parse::match_affiliations(&rec, &authors);

    assert_eq!(associations.len(), 2);
    assert_eq!(associations[0].author, "Smith J.");
    assert_eq!(associations[1].author, "Smith JA");
    assert!(associations.iter().all(|a| a.country == "USA"));
}

#[test]
fn test_matcher_uses_substring_containment_not_equality() {
    let rec = record("Smith JA", "Smith, J., Dept X, MIT, USA");
    let authors = parse::split_authors(&rec.authors);
    let associations = parse::match_affiliations(&rec, &authors);

    assert_eq!(associations.len(), 1);
    assert_eq!(associations[0].author, "Smith JA");
}

#[test]
fn test_matcher_ignores_empty_and_wordless_entries() {
    let rec = record("Smith J.", " ; ;Smith J., MIT, USA;  , France");
    let authors = parse::split_authors(&rec.authors);
    let associations = parse::match_affiliations(&rec, &authors);

    assert_eq!(associations.len(), 1);
    assert_eq!(associations[0].country, "USA");
}

#[test]
fn test_matcher_entry_without_comma_uses_whole_entry_for_both_parts() {
    let rec = record("Solo A.", "Solo");
    let authors = parse::split_authors(&rec.authors);
    let associations = parse::match_affiliations(&rec, &authors);

    assert_eq!(associations.len(), 1);
    assert_eq!(associations[0].country, "Solo");
}

#[test]
fn test_year_parsing_int_string_and_empty() {
    assert_eq!(coauthor_graph::parse_year("2020"), Some(Value::from(2020)));
    assert_eq!(
        coauthor_graph::parse_year("in press"),
        Some(Value::from("in press"))
    );
    assert_eq!(coauthor_graph::parse_year("   "), None);
}

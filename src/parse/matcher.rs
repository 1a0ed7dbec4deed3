use crate::{AuthorAssociation, PublicationRecord};

/// One semicolon-delimited block of the affiliation field, reduced to the
/// two pieces the matcher cares about.
struct AffiliationEntry<'a> {
    entry_name: &'a str,
    country: &'a str,
}

impl<'a> AffiliationEntry<'a> {
    /// `entry_name` is the text before the first comma, `country` the text
    /// after the last one. An entry with no comma yields the whole entry
    /// for both.
    fn parse(raw: &'a str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let entry_name = trimmed.split(',').next().unwrap_or(trimmed).trim();
        let country = trimmed.rsplit(',').next().unwrap_or(trimmed).trim();
        Some(Self { entry_name, country })
    }
}

/// Associate affiliation entries with author tokens for one record.
///
/// The policy is first-word substring containment: an entry whose
/// `entry_name` starts with "Smith" matches the token "Smith JA" because
/// "Smith" occurs inside it. This is deliberately crude; the whole policy
/// lives here so it can be swapped without touching graph accumulation.
///
/// An entry matching several tokens emits one association per match, and a
/// token may be hit by several entries. Entries that are empty, have no
/// leading word, or match no token are dropped without comment. Precedence
/// between competing associations for the same token is not decided here;
/// the graph accumulator's first-occurrence rule governs that.
pub fn match_affiliations(
    record: &PublicationRecord,
    authors: &[String],
) -> Vec<AuthorAssociation> {
    let year = crate::parse_year(&record.year);
    let mut associations = Vec::new();

    for raw_entry in record.affiliations.split(';') {
        let entry = match AffiliationEntry::parse(raw_entry) {
            Some(e) => e,
            None => continue,
        };

        let first_token = match entry.entry_name.split_whitespace().next() {
            Some(word) => word,
            None => continue,
        };

        for author in authors {
            if author.contains(first_token) {
                associations.push(AuthorAssociation {
                    author: author.clone(),
                    country: entry.country.to_string(),
                    title: record.title.clone(),
                    year: year.clone(),
                });
            }
        }
    }

    associations
}

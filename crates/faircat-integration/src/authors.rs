//! Author canonicalization and classification
//!
//! Raw author strings arrive littered with honorifics, parentheticals,
//! bracketed affiliations, and harvester boilerplate. Cleaning is an
//! explicit ordered pipeline of pure string transforms, each independently
//! testable; cleaned names are then deduplicated and classified as person
//! or organization.

use faircat_domain::Author;
use regex::Regex;
use std::sync::LazyLock;

/// Anything between {}, [], (), or <>
static BETWEEN_BRACKETS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{.*?\}|\[.*?\]|\(.*?\)|<.*?>").unwrap());

/// Anything after an unclosed opening bracket
static AFTER_OPEN_BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{.*|\[.*|\(.*|<.*").unwrap());

/// Anything up to and including a closing bracket
static BEFORE_CLOSE_BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*?\}|.*?\]|.*?>").unwrap());

/// Leading honorific
static HONORIFIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Dr\.?\s*").unwrap());

/// Boilerplate prefix ending in "code" (case-insensitive on the keyword)
static THROUGH_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^.*?[cC]ode").unwrap());

/// Boilerplate prefix ending in "from"
static THROUGH_FROM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^.*?from").unwrap());

/// Whitespace-delimited tokens that mark an entry as an institution
const ORG_KEYWORDS: &[&str] = &[
    "university",
    "université",
    "universidad",
    "universidade",
    "università",
    "universität",
    "institut",
    "institute",
    "college",
    "school",
    "department",
    "laboratory",
    "laboratoire",
    "lab",
    "center",
    "centre",
    "research",
    "researcher",
    "researchers",
    "group",
    "support",
    "foundation",
    "company",
    "corporation",
    "team",
    "helpdesk",
    "service",
    "platform",
    "program",
    "programme",
    "community",
];

/// Person entries with this many words or more are treated as boilerplate
const MAX_PERSON_WORDS: usize = 5;

/// Strip one parenthetical enclosing the whole string
pub fn strip_enclosing_parenthetical(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('(') && value.ends_with(')') {
        value[1..value.len() - 1].to_string()
    } else {
        value.to_string()
    }
}

/// Remove bracketed content: between pairs first, then anything trailing
/// an opening bracket, then anything before a closing bracket
pub fn strip_brackets(value: &str) -> String {
    let value = BETWEEN_BRACKETS_RE.replace_all(value, "");
    let value = AFTER_OPEN_BRACKET_RE.replace_all(&value, "");
    BEFORE_CLOSE_BRACKET_RE.replace_all(&value, "").into_owned()
}

/// Remove a leading "Dr"/"Dr." honorific
pub fn strip_honorific(value: &str) -> String {
    HONORIFIC_RE.replace(value, "").into_owned()
}

/// Drop harvester boilerplate: entries naming code handovers are removed
/// outright, otherwise everything up to a "code"/"from" marker goes
pub fn strip_boilerplate(value: &str) -> String {
    if value.contains("initial R code") || value.contains("contact form") {
        return String::new();
    }
    let value = THROUGH_CODE_RE.replace(value, "");
    THROUGH_FROM_RE.replace(&value, "").into_owned()
}

/// The full cleaning pipeline for one raw author string
pub fn clean_author(raw: &str) -> String {
    let name = strip_enclosing_parenthetical(raw);
    let name = strip_brackets(&name);
    let name = strip_honorific(&name);
    let name = strip_boilerplate(&name);
    name.trim().to_string()
}

/// True when any token of the cleaned name matches the institutional
/// keyword set, compared case-insensitively
pub fn is_organization(name: &str) -> bool {
    name.split_whitespace()
        .any(|word| ORG_KEYWORDS.contains(&word.to_lowercase().as_str()))
}

/// Clean, deduplicate, and classify a group's raw author strings
///
/// Person entries whose cleaned name runs to five or more words are
/// dropped as non-name boilerplate; organizations keep their full name.
pub fn canonicalize_authors<'a, I>(raw_authors: I) -> Vec<Author>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<String> = Vec::new();
    let mut authors = Vec::new();

    for raw in raw_authors {
        let name = clean_author(raw);
        if seen.contains(&name) {
            continue;
        }
        seen.push(name.clone());

        if name.is_empty() {
            continue;
        }

        if is_organization(&name) {
            authors.push(Author::organization(name));
        } else if name.split_whitespace().count() < MAX_PERSON_WORDS {
            authors.push(Author::person(name));
        }
    }

    authors
}

#[cfg(test)]
mod tests {
    use super::*;
    use faircat_domain::AuthorKind;

    #[test]
    fn test_strip_enclosing_parenthetical() {
        assert_eq!(strip_enclosing_parenthetical("(John Smith)"), "John Smith");
        assert_eq!(strip_enclosing_parenthetical("John Smith"), "John Smith");
    }

    #[test]
    fn test_strip_brackets() {
        assert_eq!(strip_brackets("John [EMBL] Smith"), "John  Smith");
        assert_eq!(strip_brackets("John Smith <js@x.org>"), "John Smith ");
        assert_eq!(strip_brackets("John Smith [dangling"), "John Smith ");
    }

    #[test]
    fn test_strip_honorific_only_leading() {
        assert_eq!(strip_honorific("Dr. John Smith"), "John Smith");
        assert_eq!(strip_honorific("Dr John Smith"), "John Smith");
        assert_eq!(strip_honorific("Sandra Droz"), "Sandra Droz");
    }

    #[test]
    fn test_strip_boilerplate() {
        assert_eq!(strip_boilerplate("Based on code John Smith"), " John Smith");
        assert_eq!(strip_boilerplate("ported from Jane Doe"), " Jane Doe");
        assert_eq!(strip_boilerplate("initial R code by X"), "");
        assert_eq!(strip_boilerplate("use the contact form"), "");
    }

    #[test]
    fn test_clean_author_doctor_with_parenthetical() {
        assert_eq!(clean_author("Dr. John Smith (maintainer)"), "John Smith");
    }

    #[test]
    fn test_classification() {
        assert!(is_organization("Bioinformatics Research Group"));
        assert!(is_organization("Uppsala University"));
        assert!(!is_organization("John Smith"));
    }

    #[test]
    fn test_canonicalize_authors_dedups_cleaned_names() {
        let authors = canonicalize_authors(["John Smith", "Dr. John Smith"]);
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].name, "John Smith");
        assert_eq!(authors[0].kind, AuthorKind::Person);
        assert_eq!(authors[0].email, "");
        assert!(!authors[0].maintainer);
    }

    #[test]
    fn test_overlong_person_dropped_but_organization_kept() {
        let authors = canonicalize_authors([
            "please email the person who wrote this",
            "Department of Clinical Science and Education",
        ]);
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].kind, AuthorKind::Organization);
    }

    #[test]
    fn test_empty_after_cleaning_dropped() {
        let authors = canonicalize_authors(["   ", "use the contact form"]);
        assert!(authors.is_empty());
    }

    #[test]
    fn test_enclosing_parenthetical_unwraps_rather_than_drops() {
        // "(maintainer)" is unwrapped by the first pipeline step, so the
        // bare word survives as a one-word person entry
        let authors = canonicalize_authors(["(maintainer)"]);
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].name, "maintainer");
        assert_eq!(authors[0].kind, AuthorKind::Person);
    }
}

//! Generic field merge policies
//!
//! The deterministic per-field reducers the integrator applies: set-union
//! in encounter order, longest-string selection, first-non-empty pick.
//! Field-specific policies (authors, licenses, publications, source
//! labels) live in their own modules.

/// Union of string values across group members, in encounter order
///
/// Values are trimmed before comparison and storage; duplicates after
/// trimming collapse into the first occurrence. Empty values are dropped.
pub fn union_trimmed<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = Vec::new();
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !seen.iter().any(|s| s == trimmed) {
            seen.push(trimmed.to_string());
        }
    }
    seen
}

/// Union of arbitrary values by exact equality, in encounter order
pub fn union_by_eq<T: PartialEq + Clone>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen: Vec<T> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// First non-empty value in encounter order, if any
pub fn first_non_empty<'a, I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

/// Select the final description from the union of description variants
///
/// Picks the variant with the greatest character length, uppercases its
/// first letter, and appends a terminal period when missing. An empty
/// union yields an empty string.
pub fn select_description(variants: &[String]) -> String {
    // First-wins on length ties
    let mut longest = String::new();
    for variant in variants {
        if variant.chars().count() > longest.chars().count() {
            longest = variant.clone();
        }
    }

    if longest.is_empty() {
        return longest;
    }

    let mut chars = longest.chars();
    let mut result: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    if !result.ends_with('.') {
        result.push('.');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_trimmed_dedups_after_trim() {
        let values = vec!["a tool", " a tool ", "another", ""];
        let union = union_trimmed(values.iter().copied());
        assert_eq!(union, vec!["a tool", "another"]);
    }

    #[test]
    fn test_union_trimmed_preserves_encounter_order() {
        let union = union_trimmed(["b", "a", "b", "c"]);
        assert_eq!(union, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_union_by_eq() {
        let union = union_by_eq([1, 2, 1, 3]);
        assert_eq!(union, vec![1, 2, 3]);
    }

    #[test]
    fn test_first_non_empty() {
        assert_eq!(first_non_empty(["", "  ", "1.2"]), Some("1.2".to_string()));
        assert_eq!(first_non_empty(["", "  "]), None);
    }

    #[test]
    fn test_select_description_picks_longest() {
        let variants = vec![
            "short".to_string(),
            "a much longer description of the tool".to_string(),
        ];
        assert_eq!(
            select_description(&variants),
            "A much longer description of the tool."
        );
    }

    #[test]
    fn test_select_description_keeps_existing_period_and_case() {
        let variants = vec!["Aligns DNA sequences.".to_string()];
        assert_eq!(select_description(&variants), "Aligns DNA sequences.");
    }

    #[test]
    fn test_select_description_only_first_letter_changes() {
        // The tail keeps its casing; only the first letter is uppercased.
        let variants = vec!["aligns DNA sequences".to_string()];
        assert_eq!(select_description(&variants), "Aligns DNA sequences.");
    }

    #[test]
    fn test_select_description_empty_union() {
        assert_eq!(select_description(&[]), "");
    }
}

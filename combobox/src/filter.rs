//! Option filtering.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::option::{Label, SelectOption};

/// Default filter: case-insensitive substring match against a text label.
///
/// Rich labels never match.
pub fn default_filter_option(label: &Label, query: &str) -> bool {
    label
        .as_text()
        .is_some_and(|text| text.to_lowercase().contains(&query.to_lowercase()))
}

/// Fuzzy filter using nucleo-matcher.
///
/// Install it with `SelectProps::filter_option` to get fuzzy matching
/// instead of substring matching. An empty query matches everything.
pub fn fuzzy_filter_option(option: &SelectOption, query: &str) -> bool {
    let Some(text) = option.label.as_text() else {
        return false;
    };
    if query.is_empty() {
        return true;
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );
    let mut buf = Vec::new();
    pattern
        .score(Utf32Str::new(text, &mut buf), &mut matcher)
        .is_some()
}

/// Filter loaded options against a query.
///
/// The predicate runs for every option, empty query included. Returns the
/// matching options in load order. When nothing matches, a non-empty query
/// yields `Some(vec![])` and an empty query yields `None` ("no filter, show
/// everything").
pub fn filter_options(
    options: &[SelectOption],
    query: &str,
    mut matches: impl FnMut(&SelectOption, &str) -> bool,
) -> Option<Vec<SelectOption>> {
    let filtered: Vec<SelectOption> = options
        .iter()
        .filter(|option| matches(option, query))
        .cloned()
        .collect();

    if filtered.is_empty() && query.is_empty() {
        return None;
    }
    Some(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuidom::Element;

    fn fruit() -> Vec<SelectOption> {
        vec![
            SelectOption::new("1", "Apple"),
            SelectOption::new("2", "Banana"),
        ]
    }

    fn by_label(option: &SelectOption, query: &str) -> bool {
        default_filter_option(&option.label, query)
    }

    #[test]
    fn substring_is_case_insensitive() {
        assert!(default_filter_option(&Label::from("Banana"), "AN"));
        assert!(!default_filter_option(&Label::from("Apple"), "an"));
    }

    #[test]
    fn rich_label_never_matches() {
        assert!(!default_filter_option(&Label::from(Element::text("Banana")), "an"));
    }

    #[test]
    fn filter_an_keeps_banana() {
        let filtered = filter_options(&fruit(), "an", by_label).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn no_match_with_query_is_empty_list() {
        assert_eq!(filter_options(&fruit(), "zz", by_label), Some(vec![]));
    }

    #[test]
    fn empty_query_with_no_match_clears_filter() {
        assert_eq!(filter_options(&fruit(), "", |_, _| false), None);
        assert_eq!(filter_options(&[], "", by_label), None);
    }

    #[test]
    fn empty_query_still_runs_predicate() {
        let options = vec![
            SelectOption::new("1", "Apple"),
            SelectOption::new("2", Element::text("Banana")),
        ];
        let filtered = filter_options(&options, "", by_label).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");

        let only_two = filter_options(&fruit(), "", |option, _| option.id == "2");
        assert_eq!(only_two, Some(vec![SelectOption::new("2", "Banana")]));
    }

    #[test]
    fn fuzzy_matches_subsequence() {
        let options = fruit();
        assert!(fuzzy_filter_option(&options[1], "bna"));
        assert!(!fuzzy_filter_option(&options[0], "xyz"));
    }
}

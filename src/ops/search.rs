use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::model::task::TaskRecord;

/// Whether `name` contains `query`, ignoring case. An empty query matches everything.
pub fn name_matches(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Tasks whose names contain `query` (case-insensitive), in their original order
pub fn filter_tasks<'a, I>(records: I, query: &str) -> Vec<&'a TaskRecord>
where
    I: IntoIterator<Item = &'a TaskRecord>,
{
    records
        .into_iter()
        .filter(|record| name_matches(&record.name, query))
        .collect()
}

/// Case-insensitive literal matcher for `query`, or None for an empty query
pub fn query_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Collect all non-overlapping match byte-ranges for a regex in the given text.
pub fn find_matches(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;
    use crate::ops::task_list::TaskList;

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.add("Buy milk", "2024-01-02 10:00:00", Priority::Low);
        list.add("Pay rent", "2024-01-01 09:00:00", Priority::High);
        list.add("buy BREAD", "2024-01-03 09:00:00", Priority::Medium);
        list
    }

    #[test]
    fn filter_is_case_insensitive_and_ordered() {
        let list = sample();
        let hits: Vec<&str> = filter_tasks(&list, "BUY")
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(hits, vec!["Buy milk", "buy BREAD"]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let list = sample();
        assert_eq!(filter_tasks(&list, "").len(), 3);
    }

    #[test]
    fn no_hits() {
        let list = sample();
        assert!(filter_tasks(&list, "zebra").is_empty());
    }

    #[test]
    fn query_is_literal_not_a_pattern() {
        let re = query_regex("a.b").unwrap();
        assert!(find_matches(&re, "axb").is_empty());
        assert_eq!(find_matches(&re, "see A.B here"), vec![4..7]);
    }

    #[test]
    fn finds_every_occurrence() {
        let re = query_regex("an").unwrap();
        assert_eq!(find_matches(&re, "banana"), vec![1..3, 3..5]);
        assert!(query_regex("").is_none());
    }
}

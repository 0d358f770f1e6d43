//! Small ordered-list helpers shared by the resolver and the file loader.

use itertools::Itertools;

/// Push `value` onto `items` unless an equal entry is already present.
/// Insertion order is preserved, so repeated pushes keep the first position.
pub fn append_unique(items: &mut Vec<String>, value: &str) {
    if !items.iter().any(|existing| existing == value) {
        items.push(value.to_string());
    }
}

/// Drop repeated values, keeping the first occurrence of each.
pub fn remove_duplicates(items: &[String]) -> Vec<String> {
    items.iter().cloned().unique().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn append_unique_adds_new_values_at_the_end() {
        let mut items = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        append_unique(&mut items, "four");
        assert_eq!(items, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn append_unique_ignores_known_values() {
        let mut items = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        append_unique(&mut items, "one");
        assert_eq!(items, vec!["one", "two", "three"]);
    }

    #[test]
    fn remove_duplicates_keeps_first_occurrences_in_order() {
        let items: Vec<String> = ["apple", "banana", "apple", "orange", "banana", "grape"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            remove_duplicates(&items),
            vec!["apple", "banana", "orange", "grape"]
        );
    }

    #[test]
    fn remove_duplicates_is_identity_on_unique_input() {
        let items: Vec<String> = ["apple", "banana", "orange", "grape"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(remove_duplicates(&items), items);
    }
}

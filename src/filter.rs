//! Filter Engine
//!
//! Category restriction plus id-or-name search over the flattened list.

use crate::config::ALL_CATEGORIES_VALUE;
use crate::models::FlatItem;

/// Which parent category the user restricted the list to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Map a `<select>` value; "all" and empty mean no restriction
    pub fn from_select_value(value: &str) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES_VALUE {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }

    pub fn as_select_value(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES_VALUE,
            Self::Named(name) => name,
        }
    }

    fn accepts(&self, item: &FlatItem) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => item.parent_name == *name,
        }
    }
}

/// How the search box text is interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    /// Matches everything
    Any,
    /// All-digit input: exact id match
    Id(String),
    /// Case-insensitive substring of the name (already lowercased)
    Name(String),
}

impl SearchMode {
    pub fn parse(raw: &str) -> Self {
        let term = raw.trim();
        if term.is_empty() {
            Self::Any
        } else if term.chars().all(|c| c.is_ascii_digit()) {
            Self::Id(term.to_string())
        } else {
            Self::Name(term.to_lowercase())
        }
    }

    fn accepts(&self, item: &FlatItem) -> bool {
        match self {
            Self::Any => true,
            Self::Id(id) => item.id.as_str() == id,
            Self::Name(needle) => item.name.to_lowercase().contains(needle.as_str()),
        }
    }
}

/// Stable filter: surviving items keep their source order
pub fn apply_filters(items: &[FlatItem], category: &CategoryFilter, search: &str) -> Vec<FlatItem> {
    let mode = SearchMode::parse(search);
    items
        .iter()
        .filter(|item| category.accepts(item) && mode.accepts(item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    fn make_item(id: &str, name: &str, parent: &str) -> FlatItem {
        FlatItem {
            id: ItemId::new(id),
            name: name.to_string(),
            pic: None,
            parent_name: parent.to_string(),
        }
    }

    fn sample() -> Vec<FlatItem> {
        vec![
            make_item("42", "Category A", "Games"),
            make_item("420", "Chess", "Games"),
            make_item("7", "Concats", "Music"),
            make_item("8", "Singing", "Music"),
        ]
    }

    fn ids(items: &[FlatItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_all_with_empty_search_returns_everything_in_order() {
        let items = sample();
        let result = apply_filters(&items, &CategoryFilter::All, "");
        assert_eq!(result, items);
    }

    #[test]
    fn test_numeric_search_is_exact_id_match() {
        let result = apply_filters(&sample(), &CategoryFilter::All, "42");
        assert_eq!(ids(&result), vec!["42"]);

        let result = apply_filters(&sample(), &CategoryFilter::All, " 420 ");
        assert_eq!(ids(&result), vec!["420"]);

        assert!(apply_filters(&sample(), &CategoryFilter::All, "4").is_empty());
    }

    #[test]
    fn test_text_search_is_case_insensitive_substring() {
        let result = apply_filters(&sample(), &CategoryFilter::All, "cat");
        assert_eq!(ids(&result), vec!["42", "7"]);

        let result = apply_filters(&sample(), &CategoryFilter::All, "  SING ");
        assert_eq!(ids(&result), vec!["8"]);
    }

    #[test]
    fn test_category_restriction() {
        let music = CategoryFilter::Named("Music".to_string());
        assert_eq!(ids(&apply_filters(&sample(), &music, "")), vec!["7", "8"]);
        assert_eq!(ids(&apply_filters(&sample(), &music, "cat")), vec!["7"]);
        assert!(apply_filters(&sample(), &music, "42").is_empty());

        let unknown = CategoryFilter::Named("Nope".to_string());
        assert!(apply_filters(&sample(), &unknown, "").is_empty());
    }

    #[test]
    fn test_mixed_digit_text_uses_name_mode() {
        assert_eq!(SearchMode::parse("a42"), SearchMode::Name("a42".to_string()));
        assert_eq!(SearchMode::parse("   "), SearchMode::Any);
        assert_eq!(SearchMode::parse("007"), SearchMode::Id("007".to_string()));
    }

    #[test]
    fn test_select_value_mapping() {
        assert_eq!(CategoryFilter::from_select_value("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_select_value(""), CategoryFilter::All);
        let named = CategoryFilter::from_select_value("Music");
        assert_eq!(named, CategoryFilter::Named("Music".to_string()));
        assert_eq!(named.as_select_value(), "Music");
        assert_eq!(CategoryFilter::All.as_select_value(), "all");
    }
}

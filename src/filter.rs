//! Client-Side Filtering
//!
//! Pure filter over the already-loaded item list; never touches the backend.

use crate::models::PantryItem;

/// Criteria from the filter dialog. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match on the item name
    pub name: String,
    /// Case-insensitive substring match on the category
    pub category: String,
    /// Exact match on the expiration date, applied only when non-empty
    pub date: String,
    /// Exact match on the quantity text, applied only when non-empty
    pub qty: String,
}

impl FilterCriteria {
    pub fn matches(&self, item: &PantryItem) -> bool {
        let name_ok = item
            .name
            .to_lowercase()
            .contains(&self.name.to_lowercase());
        let category_ok = item
            .category
            .to_lowercase()
            .contains(&self.category.to_lowercase());
        let date_ok = self.date.is_empty() || item.date == self.date;
        let qty_ok = self.qty.is_empty() || item.qty == self.qty;
        name_ok && category_ok && date_ok && qty_ok
    }
}

/// The subset of `items` matching `criteria`, in load order
pub fn apply_filter(items: &[PantryItem], criteria: &FilterCriteria) -> Vec<PantryItem> {
    items
        .iter()
        .filter(|item| criteria.matches(item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str, date: &str, qty: &str) -> PantryItem {
        PantryItem {
            id: name.to_lowercase(),
            name: name.into(),
            category: category.into(),
            date: date.into(),
            qty: qty.into(),
        }
    }

    fn pantry() -> Vec<PantryItem> {
        vec![
            item("Milk", "Dairy", "2026-09-01", "2"),
            item("Eggs", "Dairy", "2026-09-10", "12"),
            item("Apples", "Fruits", "2026-09-01", "6"),
        ]
    }

    #[test]
    fn empty_criteria_match_everything() {
        let items = pantry();
        assert_eq!(apply_filter(&items, &FilterCriteria::default()), items);
    }

    #[test]
    fn category_filter_is_case_insensitive_substring() {
        let items = pantry();
        let criteria = FilterCriteria {
            category: "dai".into(),
            ..Default::default()
        };
        let filtered = apply_filter(&items, &criteria);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|i| i.category == "Dairy"));
    }

    #[test]
    fn name_filter_is_substring() {
        let items = pantry();
        let criteria = FilterCriteria {
            name: "PPL".into(),
            ..Default::default()
        };
        let filtered = apply_filter(&items, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Apples");
    }

    #[test]
    fn date_and_qty_are_exact_matches() {
        let items = pantry();
        let by_date = FilterCriteria {
            date: "2026-09-01".into(),
            ..Default::default()
        };
        assert_eq!(apply_filter(&items, &by_date).len(), 2);

        let by_qty = FilterCriteria {
            qty: "1".into(),
            ..Default::default()
        };
        // "1" is not an exact match for "12"
        assert!(apply_filter(&items, &by_qty).is_empty());
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let items = pantry();
        let criteria = FilterCriteria {
            category: "dairy".into(),
            date: "2026-09-01".into(),
            ..Default::default()
        };
        let filtered = apply_filter(&items, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Milk");
    }
}

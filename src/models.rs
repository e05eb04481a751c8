//! Frontend Models
//!
//! Data structures matching the documents and sessions the backend hands out.

use serde::{Deserialize, Serialize};

/// Fixed category set for pantry items
pub const CATEGORIES: &[&str] = &[
    "Fruits",
    "Vegetables",
    "Pets",
    "Fresh Meat",
    "Stationary",
    "Dairy",
    "Bakery",
    "Snacks",
    "Frozen Food",
    "Other",
];

/// A pantry item document from the user's inventory collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryItem {
    /// Document id assigned by the store
    pub id: String,
    pub name: String,
    pub category: String,
    /// Expiration date, `YYYY-MM-DD`
    pub date: String,
    /// Quantity, kept as the raw text the user entered
    pub qty: String,
}

impl PantryItem {
    /// The user-editable fields, for seeding an edit form
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            category: self.category.clone(),
            date: self.date.clone(),
            qty: self.qty.clone(),
        }
    }
}

/// The four user-entered fields of an item, before it has an id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub category: String,
    pub date: String,
    pub qty: String,
}

/// An authenticated session handed back by the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Provider user id (`localId`), keys the per-user collection path
    pub uid: String,
    /// Bearer token for document-store requests
    pub id_token: String,
    pub email: String,
}

/// Upper-case the first letter for display; stored case is preserved
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_basic() {
        assert_eq!(capitalize_first("milk"), "Milk");
        assert_eq!(capitalize_first("Milk"), "Milk");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn fields_round_trip_from_item() {
        let item = PantryItem {
            id: "abc".into(),
            name: "Eggs".into(),
            category: "Dairy".into(),
            date: "2026-09-01".into(),
            qty: "12".into(),
        };
        let fields = item.fields();
        assert_eq!(fields.name, "Eggs");
        assert_eq!(fields.qty, "12");
    }
}

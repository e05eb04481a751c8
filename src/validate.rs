//! Client-Side Validation
//!
//! Pure checks run before any backend call. Each function returns the first
//! failing rule's display message, in the same order the screens report them.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::models::{ItemFields, PantryItem};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]{2,50}$").expect("name regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Symbols a password may (and must) contain
const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

/// Today's calendar date in the browser's timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYY-MM-DD` string for date inputs
pub fn today_string() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// Password rule: length >= 8, at least one lowercase, uppercase, digit and
/// symbol, and nothing outside `[A-Za-z0-9!@#$%^&*]`. Expressed as scans
/// because the `regex` crate has no look-aheads.
fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c))
}

/// Account-creation checks, short-circuiting on the first failure
pub fn validate_account(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    if name.chars().count() < 2 {
        return Err("Name must be at least 2 characters.".into());
    }
    if name.chars().count() > 50 {
        return Err("Name must be less than 50 characters.".into());
    }
    if !NAME_RE.is_match(name) {
        return Err(
            "Invalid name format. Please use only letters, spaces, hyphens, or apostrophes."
                .into(),
        );
    }
    if !EMAIL_RE.is_match(email) {
        return Err("Invalid email format.".into());
    }
    if !is_valid_password(password) {
        return Err(
            "Password must be at least 8 characters long and include at least one uppercase \
             letter, one lowercase letter, one digit, and one special character."
                .into(),
        );
    }
    if password != confirm_password {
        return Err("Passwords do not match.".into());
    }
    Ok(())
}

/// Item checks shared by the add form and the edit row.
///
/// `exclude_id` is the document being edited, so saving a row does not
/// collide with its own name. Duplicate detection is case-insensitive and
/// runs against the currently loaded snapshot only.
pub fn validate_item_fields(
    fields: &ItemFields,
    existing: &[PantryItem],
    exclude_id: Option<&str>,
    today: NaiveDate,
) -> Result<(), String> {
    let name = fields.name.trim();
    let is_duplicate = existing.iter().any(|item| {
        exclude_id != Some(item.id.as_str()) && item.name.eq_ignore_ascii_case(name)
    });
    if is_duplicate {
        return Err(
            "Item already present in pantry. You may increase or decrease the quantity.".into(),
        );
    }
    if name.is_empty() {
        return Err("Please enter the item name".into());
    }
    if name.chars().count() >= 40 {
        return Err("Length of name must be less than 40 characters".into());
    }
    if fields.category.is_empty() {
        return Err("Please select a category".into());
    }
    let expires = NaiveDate::parse_from_str(&fields.date, "%Y-%m-%d");
    if !expires.is_ok_and(|d| d >= today) {
        return Err("Expiration date should either be today or later than today".into());
    }
    if fields.qty.trim().is_empty() {
        return Err("Please enter the quantity".into());
    }
    if !fields.qty.trim().parse::<f64>().is_ok_and(|q| q > 0.0) {
        return Err("Quantity must be a positive number".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> PantryItem {
        PantryItem {
            id: id.into(),
            name: name.into(),
            category: "Dairy".into(),
            date: "2099-01-01".into(),
            qty: "1".into(),
        }
    }

    fn fields(name: &str, category: &str, date: &str, qty: &str) -> ItemFields {
        ItemFields {
            name: name.into(),
            category: category.into(),
            date: date.into(),
            qty: qty.into(),
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn account_accepts_well_formed_input() {
        assert!(validate_account("Mary O'Neil-Smith", "mary@example.com", "Abcdef1!", "Abcdef1!").is_ok());
    }

    #[test]
    fn account_name_rules() {
        let ok = |n: &str| validate_account(n, "a@b.co", "Abcdef1!", "Abcdef1!").is_ok();
        assert!(ok("Jo"));
        assert!(ok("Anne Marie"));
        assert!(ok("O'Brian"));
        assert!(ok("Jean-Luc"));
        assert!(!ok("J"));
        assert!(!ok(&"a".repeat(51)));
        assert!(!ok("R2D2"));
        assert!(!ok("name_with_underscores"));
    }

    #[test]
    fn account_short_name_message_comes_first() {
        let err = validate_account("J", "not-an-email", "short", "short").unwrap_err();
        assert_eq!(err, "Name must be at least 2 characters.");
    }

    #[test]
    fn account_email_rules() {
        let ok = |e: &str| validate_account("Jo", e, "Abcdef1!", "Abcdef1!").is_ok();
        assert!(ok("user@example.com"));
        assert!(ok("a.b+c@d.e.fg"));
        assert!(!ok("no-at-sign.com"));
        assert!(!ok("no@dot"));
        assert!(!ok("spaces in@mail.com"));
    }

    #[test]
    fn account_password_requires_every_class() {
        let ok = |p: &str| validate_account("Jo", "a@b.co", p, p).is_ok();
        assert!(ok("Abcdef1!"));
        assert!(!ok("abcdef1!")); // no uppercase
        assert!(!ok("ABCDEF1!")); // no lowercase
        assert!(!ok("Abcdefg!")); // no digit
        assert!(!ok("Abcdefg1")); // no symbol
        assert!(!ok("Ab1!")); // too short
        assert!(!ok("Abcdef1! ")); // space is outside the allowed set
    }

    #[test]
    fn account_confirmation_must_match() {
        let err = validate_account("Jo", "a@b.co", "Abcdef1!", "Abcdef2!").unwrap_err();
        assert_eq!(err, "Passwords do not match.");
    }

    #[test]
    fn item_duplicate_name_rejected_case_insensitively() {
        let existing = vec![item("1", "Milk")];
        let err = validate_item_fields(
            &fields("milk", "Dairy", "2099-01-01", "2"),
            &existing,
            None,
            day("2026-08-28"),
        )
        .unwrap_err();
        assert!(err.starts_with("Item already present in pantry."));
    }

    #[test]
    fn item_duplicate_check_excludes_the_row_being_edited() {
        let existing = vec![item("1", "Milk"), item("2", "Eggs")];
        // Saving item 1 under its own name is fine
        assert!(validate_item_fields(
            &fields("Milk", "Dairy", "2099-01-01", "2"),
            &existing,
            Some("1"),
            day("2026-08-28"),
        )
        .is_ok());
        // Renaming item 1 onto item 2's name is not
        assert!(validate_item_fields(
            &fields("eggs", "Dairy", "2099-01-01", "2"),
            &existing,
            Some("1"),
            day("2026-08-28"),
        )
        .is_err());
    }

    #[test]
    fn item_name_length_rules() {
        let today = day("2026-08-28");
        assert_eq!(
            validate_item_fields(&fields("", "Dairy", "2099-01-01", "1"), &[], None, today)
                .unwrap_err(),
            "Please enter the item name"
        );
        assert!(validate_item_fields(
            &fields(&"a".repeat(40), "Dairy", "2099-01-01", "1"),
            &[],
            None,
            today
        )
        .is_err());
        assert!(validate_item_fields(
            &fields(&"a".repeat(39), "Dairy", "2099-01-01", "1"),
            &[],
            None,
            today
        )
        .is_ok());
    }

    #[test]
    fn item_category_required() {
        let err = validate_item_fields(
            &fields("Milk", "", "2099-01-01", "1"),
            &[],
            None,
            day("2026-08-28"),
        )
        .unwrap_err();
        assert_eq!(err, "Please select a category");
    }

    #[test]
    fn item_expiration_must_be_today_or_later() {
        let today = day("2026-08-28");
        let check = |date: &str| validate_item_fields(&fields("Milk", "Dairy", date, "1"), &[], None, today);
        assert!(check("2026-08-27").is_err());
        assert!(check("2026-08-28").is_ok());
        assert!(check("2026-08-29").is_ok());
        assert!(check("not-a-date").is_err());
        assert!(check("").is_err());
    }

    #[test]
    fn item_quantity_must_be_positive_numeric() {
        let today = day("2026-08-28");
        let check = |qty: &str| validate_item_fields(&fields("Milk", "Dairy", "2099-01-01", qty), &[], None, today);
        assert_eq!(check("").unwrap_err(), "Please enter the quantity");
        assert_eq!(check("0").unwrap_err(), "Quantity must be a positive number");
        assert!(check("-3").is_err());
        assert!(check("12abc").is_err());
        assert!(check("2.5").is_ok());
        assert!(check("12").is_ok());
    }
}

//! Document Store Bindings
//!
//! CRUD over the per-user `users/{uid}/inventory` collection via the
//! Firestore REST API. Every operation is a single-document request with no
//! cross-document atomicity; the caller holds the bearer token in its
//! `Session`.

use serde_json::{json, Value};

use crate::models::{ItemFields, PantryItem, Session};

use super::config::FirebaseConfig;
use super::error::FirebaseError;

/// Upper bound on a list response; the app does not paginate
const PAGE_SIZE: &str = "300";

/// Fetch a snapshot of the user's inventory, in the store's arrival order
pub async fn list_items(
    config: &FirebaseConfig,
    session: &Session,
) -> Result<Vec<PantryItem>, FirebaseError> {
    let response = reqwest::Client::new()
        .get(config.inventory_url(&session.uid))
        .query(&[("pageSize", PAGE_SIZE)])
        .bearer_auth(&session.id_token)
        .send()
        .await?;
    let body: Value = check_status(response).await?.json().await?;

    // An empty collection comes back as `{}` with no `documents` key
    let items = body
        .get("documents")
        .and_then(Value::as_array)
        .map(|docs| docs.iter().filter_map(decode_document).collect())
        .unwrap_or_default();
    Ok(items)
}

/// Create a new inventory document; the store assigns the id
pub async fn create_item(
    config: &FirebaseConfig,
    session: &Session,
    fields: &ItemFields,
) -> Result<(), FirebaseError> {
    let response = reqwest::Client::new()
        .post(config.inventory_url(&session.uid))
        .bearer_auth(&session.id_token)
        .json(&json!({ "fields": encode_fields(fields) }))
        .send()
        .await?;
    check_status(response).await?;
    Ok(())
}

/// Rewrite all four fields of one document
pub async fn update_item(
    config: &FirebaseConfig,
    session: &Session,
    doc_id: &str,
    fields: &ItemFields,
) -> Result<(), FirebaseError> {
    let response = reqwest::Client::new()
        .patch(config.document_url(&session.uid, doc_id))
        .bearer_auth(&session.id_token)
        .json(&json!({ "fields": encode_fields(fields) }))
        .send()
        .await?;
    check_status(response).await?;
    Ok(())
}

/// Delete one document
pub async fn delete_item(
    config: &FirebaseConfig,
    session: &Session,
    doc_id: &str,
) -> Result<(), FirebaseError> {
    let response = reqwest::Client::new()
        .delete(config.document_url(&session.uid, doc_id))
        .bearer_auth(&session.id_token)
        .send()
        .await?;
    check_status(response).await?;
    Ok(())
}

/// Item fields in Firestore's typed-value encoding
fn encode_fields(fields: &ItemFields) -> Value {
    json!({
        "name": { "stringValue": fields.name.trim() },
        "category": { "stringValue": fields.category.trim() },
        "date": { "stringValue": fields.date },
        "qty": { "stringValue": fields.qty },
    })
}

/// Map one Firestore document back to a `PantryItem`. Documents without a
/// usable name or id are skipped rather than failing the whole snapshot.
fn decode_document(doc: &Value) -> Option<PantryItem> {
    let id = doc
        .get("name")?
        .as_str()?
        .rsplit('/')
        .next()?
        .to_string();
    let fields = doc.get("fields")?;
    let text = |key: &str| {
        fields
            .pointer(&format!("/{key}/stringValue"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let name = text("name");
    if name.is_empty() {
        return None;
    }
    Some(PantryItem {
        id,
        name,
        category: text("category"),
        date: text("date"),
        qty: text("qty"),
    })
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, FirebaseError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let code = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| {
            body.pointer("/error/status")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| status.to_string());
    Err(FirebaseError::Provider { code })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_trims_name_and_category() {
        let fields = ItemFields {
            name: " Milk ".into(),
            category: " Dairy ".into(),
            date: "2026-09-01".into(),
            qty: "2".into(),
        };
        let encoded = encode_fields(&fields);
        assert_eq!(encoded["name"]["stringValue"], "Milk");
        assert_eq!(encoded["category"]["stringValue"], "Dairy");
        assert_eq!(encoded["qty"]["stringValue"], "2");
    }

    #[test]
    fn decode_reads_id_from_document_path() {
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/users/u1/inventory/abc123",
            "fields": {
                "name": { "stringValue": "Eggs" },
                "category": { "stringValue": "Dairy" },
                "date": { "stringValue": "2026-09-10" },
                "qty": { "stringValue": "12" },
            }
        });
        let item = decode_document(&doc).unwrap();
        assert_eq!(item.id, "abc123");
        assert_eq!(item.name, "Eggs");
        assert_eq!(item.date, "2026-09-10");
    }

    #[test]
    fn decode_tolerates_missing_fields() {
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/users/u1/inventory/x",
            "fields": { "name": { "stringValue": "Salt" } }
        });
        let item = decode_document(&doc).unwrap();
        assert_eq!(item.category, "");
        assert_eq!(item.qty, "");
    }

    #[test]
    fn decode_skips_documents_without_a_name_field() {
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/users/u1/inventory/x",
            "fields": { "category": { "stringValue": "Other" } }
        });
        assert!(decode_document(&doc).is_none());
    }

    #[test]
    fn encode_then_decode_preserves_fields() {
        let fields = ItemFields {
            name: "Milk".into(),
            category: "Dairy".into(),
            date: "2026-09-01".into(),
            qty: "2".into(),
        };
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/users/u1/inventory/d1",
            "fields": encode_fields(&fields),
        });
        let item = decode_document(&doc).unwrap();
        assert_eq!(item.fields(), fields);
    }
}

//! Firebase REST Boundary
//!
//! Thin typed client for the two managed services this app delegates to:
//! Identity Toolkit (accounts) and Firestore (per-user inventory documents).
//! Each call is a single best-effort request; nothing here retries.

mod auth;
mod config;
mod error;
mod firestore;

pub use auth::{sign_in, sign_up};
pub use config::FirebaseConfig;
pub use error::FirebaseError;
pub use firestore::{create_item, delete_item, list_items, update_item};

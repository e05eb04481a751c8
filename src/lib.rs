//! Pantry Tracker Frontend
//!
//! A Leptos CSR pantry-inventory tracker: account creation, login, and a
//! live CRUD view over each user's inventory, backed by Firebase's managed
//! auth and document store over REST.

pub mod app;
pub mod components;
pub mod context;
pub mod filter;
pub mod firebase;
pub mod models;
pub mod pages;
pub mod store;
pub mod validate;

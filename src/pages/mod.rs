//! Screens
//!
//! One module per route.

mod create_account;
mod home;
mod login;
mod pantry;

pub use create_account::CreateAccountPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use pantry::PantryPage;

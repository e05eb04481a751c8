//! Auth Provider Bindings
//!
//! Sign-up and sign-in against the Identity Toolkit REST API. Both return a
//! `Session` carrying the user id and the bearer token the document store
//! expects.

use serde::{Deserialize, Serialize};

use crate::models::Session;

use super::config::FirebaseConfig;
use super::error::FirebaseError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    local_id: String,
    id_token: String,
    #[serde(default)]
    email: String,
}

/// Create a new account. The display name collected by the form is not sent;
/// the provider keys accounts by email alone.
pub async fn sign_up(
    config: &FirebaseConfig,
    email: &str,
    password: &str,
) -> Result<Session, FirebaseError> {
    account_request(&config.identity_url("signUp"), email, password).await
}

/// Verify credentials and open a session
pub async fn sign_in(
    config: &FirebaseConfig,
    email: &str,
    password: &str,
) -> Result<Session, FirebaseError> {
    account_request(&config.identity_url("signInWithPassword"), email, password).await
}

async fn account_request(
    url: &str,
    email: &str,
    password: &str,
) -> Result<Session, FirebaseError> {
    let body = Credentials {
        email,
        password,
        return_secure_token: true,
    };
    let response = reqwest::Client::new().post(url).json(&body).send().await?;

    if !response.status().is_success() {
        return Err(provider_error(response).await);
    }

    let token: TokenResponse = response.json().await?;
    Ok(Session {
        uid: token.local_id,
        id_token: token.id_token,
        email: token.email,
    })
}

/// Pull the `error.message` code out of an Identity Toolkit failure body
async fn provider_error(response: reqwest::Response) -> FirebaseError {
    let status = response.status();
    let code = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| status.to_string());
    FirebaseError::Provider { code }
}

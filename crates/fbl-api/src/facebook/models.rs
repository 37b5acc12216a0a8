use serde::Deserialize;

/// Query parameters on the OAuth callback redirect.
///
/// `code` is optional here so its absence is our 400, not an extractor
/// rejection with a different body.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

/// The slice of the token-exchange response this service consumes.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Profile fields requested from `/me`.
#[derive(Debug, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    /// Absent when the user declined the `email` permission.
    #[serde(default)]
    pub email: Option<String>,
}

/// Form body of the mock delete action.
#[derive(Debug, Deserialize)]
pub struct DeleteDataForm {
    pub access_token: String,
}

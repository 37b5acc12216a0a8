use axum::{
    Form, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::{get, post},
};

use super::models::{CallbackQuery, DeleteDataForm};
use crate::{error::ApiError, pages, state::ApiState};

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/login-facebook", get(login))
        .route("/fb-callback", get(callback))
        .route("/delete-data", post(delete_data))
}

/// Redirect the browser to the provider's authorization dialog.
///
/// 302 rather than axum's default 303, matching what the provider's login
/// flow documents.
async fn login(State(state): State<ApiState>) -> impl IntoResponse {
    let location = state.graph.login_dialog_url().to_string();
    tracing::debug!(%location, "redirecting to login dialog");
    (StatusCode::FOUND, [(header::LOCATION, location)])
}

/// OAuth callback: exchange the code, fetch the profile, render it with the
/// delete-data form. The profile fetch is never attempted when the exchange
/// fails.
async fn callback(
    State(state): State<ApiState>,
    Query(query): Query<CallbackQuery>,
) -> Result<Html<String>, ApiError> {
    let code = query.code.ok_or(ApiError::MissingAuthCode)?;

    let token = state
        .graph
        .exchange_code(&code)
        .await
        .map_err(ApiError::TokenExchange)?;

    let profile = state
        .graph
        .fetch_profile(&token.access_token)
        .await
        .map_err(ApiError::ProfileFetch)?;

    tracing::info!(user_id = %profile.id, "oauth login completed");
    Ok(Html(pages::profile_page(&profile, &token.access_token)))
}

/// Mock "delete my data" action: a single permissions-revocation call with
/// the token the browser posted back. Nothing is deleted locally because
/// nothing is stored locally.
async fn delete_data(
    State(state): State<ApiState>,
    Form(form): Form<DeleteDataForm>,
) -> Result<Html<&'static str>, ApiError> {
    state
        .graph
        .revoke_permissions(&form.access_token)
        .await
        .map_err(ApiError::RevokePermissions)?;

    tracing::info!("permissions revoked on user request");
    Ok(Html(pages::DATA_DELETED))
}

use axum::{
    Form, Json, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use super::signed_request::SignedRequest;
use crate::{error::ApiError, pages, state::ApiState};

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/facebook-data-deletion", post(data_deletion))
        .route("/data-deletion-confirmation", get(confirmation))
}

#[derive(Debug, Deserialize)]
struct DeletionForm {
    #[serde(default)]
    signed_request: Option<String>,
}

/// Acknowledgment the provider expects back: where a user can track the
/// request, and a code identifying it.
#[derive(Debug, Serialize)]
struct DeletionConfirmation {
    url: String,
    confirmation_code: String,
}

/// Data-deletion webhook the provider calls when a user removes the app.
/// Stateless: the only effect is the confirmation in the response.
async fn data_deletion(
    State(state): State<ApiState>,
    Form(form): Form<DeletionForm>,
) -> Result<Json<DeletionConfirmation>, ApiError> {
    let raw = form.signed_request.ok_or(ApiError::MissingSignedRequest)?;
    let request = SignedRequest::parse(&raw)?;

    if state.verify_signed_requests {
        request.verify(&state.app_secret)?;
    }

    let user_id = request.payload.user_id.ok_or(ApiError::MissingUserId)?;
    tracing::info!(%user_id, "data deletion request acknowledged");

    Ok(Json(DeletionConfirmation {
        url: format!("{}/data-deletion-confirmation", state.public_base_url),
        confirmation_code: user_id,
    }))
}

async fn confirmation() -> Html<&'static str> {
    Html(pages::DELETION_CONFIRMATION)
}

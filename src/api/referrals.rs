use axum::{extract::State, routing::post, Json, Router};

use crate::error::{AppError, Result};
use crate::mail::template;
use crate::models::{ReferralRequest, ReferralResponse};
use crate::state::AppState;

/// Referral routes
pub fn referral_routes() -> Router<AppState> {
    Router::new().route("/refer-friend", post(refer_friend))
}

/// POST /api/refer-friend - Forward a referral to the organization mailbox
async fn refer_friend(
    State(state): State<AppState>,
    Json(request): Json<ReferralRequest>,
) -> Result<Json<ReferralResponse>> {
    if !request.has_required_fields() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let email = template::referral_email(&state.config, &request);

    state.mailer.send(&email).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to send referral email");
        AppError::Delivery
    })?;

    tracing::info!(
        referer = %request.referer_name,
        friend = %request.friend_name,
        "Referral forwarded to organization mailbox"
    );

    Ok(Json(ReferralResponse::submitted()))
}

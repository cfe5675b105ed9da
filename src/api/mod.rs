pub mod health;
pub mod referrals;

use axum::Router;

use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", referrals::referral_routes())
        .merge(health::health_routes())
        .with_state(state)
}

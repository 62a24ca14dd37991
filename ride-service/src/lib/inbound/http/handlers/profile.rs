use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Current user's profile.
pub async fn get_profile<US: UserServicePort>(
    State(state): State<AppState<US>>,
    Extension(current_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .user_service
        .get_user(&current_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

/// Remove the current user's account. Issued tokens stay valid until they
/// expire, but every lookup behind them now misses.
pub async fn delete_profile<US: UserServicePort>(
    State(state): State<AppState<US>>,
    Extension(current_user): Extension<AuthenticatedUser>,
) -> Result<StatusCode, ApiError> {
    state
        .user_service
        .delete_user(&current_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

use std::sync::Arc;

use auth::TokenService;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::UserId;

/// Extension type to store authenticated user ID in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Why a request was turned away by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    MissingHeader,
    InvalidFormat,
    EmptyToken,
    InvalidToken,
}

impl Rejection {
    fn message(self) -> &'static str {
        match self {
            Rejection::MissingHeader => "Authorization header required",
            Rejection::InvalidFormat => "Invalid authorization format",
            Rejection::EmptyToken => "Token required",
            Rejection::InvalidToken => "Invalid token",
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": self.message()
            })),
        )
            .into_response()
    }
}

/// Middleware that validates bearer tokens and adds the caller to request extensions
pub async fn authenticate(
    State(token_service): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = bearer_token(req.headers()).map_err(IntoResponse::into_response)?;

    let claims = token_service.validate(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        Rejection::InvalidToken.into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(claims.user_id),
    });

    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, Rejection> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(Rejection::MissingHeader)?
        .to_str()
        .map_err(|_| Rejection::InvalidFormat)?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(Rejection::InvalidFormat)?;

    if token.is_empty() {
        return Err(Rejection::EmptyToken);
    }

    Ok(token)
}

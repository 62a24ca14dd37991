use std::sync::Arc;
use std::time::Duration;

use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health::health;
use super::handlers::health::not_found;
use super::handlers::login::login;
use super::handlers::profile::delete_profile;
use super::handlers::profile::get_profile;
use super::handlers::register::register;
use super::middleware::authenticate;
use crate::domain::user::ports::UserServicePort;

pub struct AppState<US: UserServicePort> {
    pub user_service: Arc<US>,
}

impl<US: UserServicePort> Clone for AppState<US> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
        }
    }
}

pub fn create_router<US: UserServicePort>(
    user_service: Arc<US>,
    token_service: Arc<TokenService>,
) -> Router {
    let state = AppState { user_service };

    let public_routes = Router::new()
        .route("/auth/register", post(register::<US>))
        .route("/auth/login", post(login::<US>));

    // Everything else under /api/v1, unknown paths included, sits behind the guard.
    let protected_routes = Router::new()
        .route(
            "/users/profile",
            get(get_profile::<US>).delete(delete_profile::<US>),
        )
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(token_service, authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    let api_routes = Router::new()
        .merge(public_routes)
        .merge(protected_routes);

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

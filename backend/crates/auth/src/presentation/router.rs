//! Auth Router

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use platform::token::TokenService;

use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGate, require_bearer_token};

/// Routes under `/api/auth`
pub fn auth_router<R>(repo: Arc<R>, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = AuthAppState { repo, tokens };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}

/// Routes under `/api/users`
///
/// Reads and creation are public. Update, patch and delete sit behind the
/// gate and are limited to the caller's own identity.
pub fn users_router<R>(repo: Arc<R>, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let gate = AuthGate::new(tokens.clone());
    let state = AuthAppState { repo, tokens };

    let public = Router::new()
        .route("/", post(handlers::create_user::<R>))
        .route("/{id}", get(handlers::get_user::<R>));

    let protected = Router::new()
        .route(
            "/{id}",
            put(handlers::update_user::<R>)
                .patch(handlers::patch_user::<R>)
                .delete(handlers::delete_user::<R>),
        )
        .route_layer(from_fn_with_state(gate, require_bearer_token));

    public.merge(protected).with_state(state)
}

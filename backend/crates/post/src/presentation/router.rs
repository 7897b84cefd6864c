//! Post Router

use std::sync::Arc;

use auth::{AuthGate, require_bearer_token};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use crate::domain::repository::{OwnerDirectory, PostRepository};
use crate::presentation::handlers::{self, PostAppState};

/// Routes under `/api/posts`, all behind the gate
pub fn posts_router<R>(repo: Arc<R>, gate: AuthGate) -> Router
where
    R: PostRepository + OwnerDirectory + Send + Sync + 'static,
{
    let state = PostAppState { repo };

    Router::new()
        .route("/", post(handlers::create_post::<R>))
        .route("/feed", get(handlers::feed::<R>))
        .route("/user/{id}", get(handlers::user_posts::<R>))
        .route(
            "/{id}",
            get(handlers::get_post::<R>)
                .put(handlers::update_post::<R>)
                .delete(handlers::delete_post::<R>),
        )
        .route_layer(from_fn_with_state(gate, require_bearer_token))
        .with_state(state)
}

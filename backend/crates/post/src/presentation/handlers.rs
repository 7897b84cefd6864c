//! HTTP Handlers
//!
//! Every route here runs behind the bearer-token gate, so handlers take
//! the caller from [`AuthenticatedUser`].

use std::sync::Arc;

use auth::AuthenticatedUser;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use crate::application::{
    CreatePostInput, CreatePostUseCase, ManagePostUseCase, ReadPostsUseCase, UpdatePostInput,
};
use crate::domain::repository::{OwnerDirectory, PostRepository};
use crate::domain::value_object::pagination::DEFAULT_LIMIT;
use crate::error::PostResult;
use crate::presentation::dto::{FeedQuery, PostRequest, PostResponse};

/// Shared state for post handlers
pub struct PostAppState<R>
where
    R: PostRepository + OwnerDirectory + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for PostAppState<R>
where
    R: PostRepository + OwnerDirectory + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// POST /api/posts
pub async fn create_post<R>(
    State(state): State<PostAppState<R>>,
    current: AuthenticatedUser,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> PostResult<(StatusCode, Json<PostResponse>)>
where
    R: PostRepository + OwnerDirectory + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let (content, media) = req.into_parts();

    let use_case = CreatePostUseCase::new(state.repo.clone(), state.repo.clone());

    let post = use_case
        .execute(CreatePostInput {
            user_id: current.user_id,
            content,
            media,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// GET /api/posts/{id}
pub async fn get_post<R>(
    State(state): State<PostAppState<R>>,
    Path(post_id): Path<String>,
) -> PostResult<Json<PostResponse>>
where
    R: PostRepository + OwnerDirectory + Send + Sync + 'static,
{
    let post = ReadPostsUseCase::new(state.repo.clone())
        .get(&post_id)
        .await?;

    Ok(Json(post.into()))
}

/// PUT /api/posts/{id}
pub async fn update_post<R>(
    State(state): State<PostAppState<R>>,
    current: AuthenticatedUser,
    Path(post_id): Path<String>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> PostResult<Json<PostResponse>>
where
    R: PostRepository + OwnerDirectory + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let (content, media) = req.into_parts();

    let post = ManagePostUseCase::new(state.repo.clone())
        .update(UpdatePostInput {
            post_id,
            user_id: current.user_id,
            content,
            media,
        })
        .await?;

    Ok(Json(post.into()))
}

/// DELETE /api/posts/{id}
pub async fn delete_post<R>(
    State(state): State<PostAppState<R>>,
    current: AuthenticatedUser,
    Path(post_id): Path<String>,
) -> PostResult<StatusCode>
where
    R: PostRepository + OwnerDirectory + Send + Sync + 'static,
{
    ManagePostUseCase::new(state.repo.clone())
        .delete(&current.user_id, &post_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/posts/user/{id}
pub async fn user_posts<R>(
    State(state): State<PostAppState<R>>,
    Path(user_id): Path<String>,
) -> PostResult<Json<Vec<PostResponse>>>
where
    R: PostRepository + OwnerDirectory + Send + Sync + 'static,
{
    let posts = ReadPostsUseCase::new(state.repo.clone())
        .by_user(&user_id)
        .await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /api/posts/feed
pub async fn feed<R>(
    State(state): State<PostAppState<R>>,
    query: Result<Query<FeedQuery>, QueryRejection>,
) -> PostResult<Json<Vec<PostResponse>>>
where
    R: PostRepository + OwnerDirectory + Send + Sync + 'static,
{
    let Query(query) = query?;

    let posts = ReadPostsUseCase::new(state.repo.clone())
        .feed(query.page.unwrap_or(1), query.limit.unwrap_or(DEFAULT_LIMIT))
        .await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use platform::token::TokenService;

use crate::application::{
    CreateUserInput, LoginInput, LoginUseCase, ManageUserUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthResponse, CreateUserRequest, LoginRequest, PatchUserRequest, RegisterRequest,
    UpdateUserRequest, UserResponse,
};
use crate::presentation::middleware::AuthenticatedUser;

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

// Manual impl: the repository itself does not need to be `Clone`
impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

// ============================================================================
// Register / Login
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<AuthResponse>)>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = RegisterUseCase::new(state.repo.clone(), state.tokens.clone());

    let input = RegisterInput {
        user_name: req.username,
        email: req.email,
        password: req.password,
        full_name: req.full_name,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: output.token,
            user: UserResponse::from(&output.user),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(AuthResponse {
        token: output.token,
        user: UserResponse::from(&output.user),
    }))
}

// ============================================================================
// Users
// ============================================================================

/// GET /api/users/{id}
pub async fn get_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(user_id): Path<String>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user = ManageUserUseCase::new(state.repo.clone())
        .get(&user_id)
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /api/users
pub async fn create_user<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<UserResponse>)>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let input = CreateUserInput {
        user_name: req.username,
        email: req.email,
        password: req.password,
        full_name: req.full_name,
        bio: req.bio,
        avatar: req.avatar,
    };

    let user = ManageUserUseCase::new(state.repo.clone())
        .create(input)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// PUT /api/users/{id}
pub async fn update_user<R>(
    State(state): State<AuthAppState<R>>,
    current: AuthenticatedUser,
    Path(user_id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let user = ManageUserUseCase::new(state.repo.clone())
        .update(&current.user_id, &user_id, req.into())
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// PATCH /api/users/{id}
pub async fn patch_user<R>(
    State(state): State<AuthAppState<R>>,
    current: AuthenticatedUser,
    Path(user_id): Path<String>,
    payload: Result<Json<PatchUserRequest>, JsonRejection>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let user = ManageUserUseCase::new(state.repo.clone())
        .patch(&current.user_id, &user_id, req.into())
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/users/{id}
pub async fn delete_user<R>(
    State(state): State<AuthAppState<R>>,
    current: AuthenticatedUser,
    Path(user_id): Path<String>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Send + Sync + 'static,
{
    ManageUserUseCase::new(state.repo.clone())
        .delete(&current.user_id, &user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

//! HTTP Handlers

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use kernel::extract::ApiJson;
use kernel::response::ApiResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    AccessGate, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, UpdateProfileInput,
    UpdateProfileUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthPayload, LoginRequest, ProfilePayload, RegisterRequest, UpdateProfileRequest,
    UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    fn gate(&self) -> AccessGate<R> {
        AccessGate::new(self.repo.clone(), self.config.clone())
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register (also mounted at /api/auth/signup)
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> AuthResult<(StatusCode, ApiResponse<AuthPayload>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::ok(AuthPayload {
            token: output.token,
            user: UserResponse::from(&output.user),
        })
        .with_message("User registered successfully"),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AuthResult<ApiResponse<AuthPayload>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(ApiResponse::ok(AuthPayload {
        token: output.token,
        user: UserResponse::from(&output.user),
    })
    .with_message("Login successful"))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/auth/profile
pub async fn get_profile<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<ApiResponse<ProfilePayload>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = state.gate().authenticate_headers(&headers).await?;

    Ok(ApiResponse::ok(ProfilePayload {
        user: UserResponse::from(&caller.user),
    }))
}

/// PUT /api/auth/profile
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<UpdateProfileRequest>,
) -> AuthResult<ApiResponse<ProfilePayload>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = state.gate().authenticate_headers(&headers).await?;

    let use_case = UpdateProfileUseCase::new(state.repo.clone());
    let user = use_case
        .execute(UpdateProfileInput {
            user_id: caller.user_id,
            name: req.name,
        })
        .await?;

    Ok(ApiResponse::ok(ProfilePayload {
        user: UserResponse::from(&user),
    })
    .with_message("Profile updated successfully"))
}

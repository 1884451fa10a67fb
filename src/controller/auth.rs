use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::user::{AuthResponseDto, LoginDto, RegisterDto, UserDto},
    service::{auth::AuthService, token},
    state::AppState,
};

/// POST /auth/register
/// Create a user account and log it in
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    if dto.username.trim().is_empty() || dto.email.trim().is_empty() || dto.password.is_empty() {
        return Err(AppError::BadRequest(
            "Username, email, and password are required".to_string(),
        ));
    }

    let user = AuthService::new(&state.db).register(dto).await?;
    let token = token::issue(&state.jwt, user.id)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            token,
            user: UserDto::from(user),
        }),
    ))
}

/// POST /auth/login
/// Exchange a username/password pair for a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .authenticate(&dto.username, &dto.password)
        .await?;
    let token = token::issue(&state.jwt, user.id)?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            token,
            user: UserDto::from(user),
        }),
    ))
}

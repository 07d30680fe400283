//! Identity routes: signup, signin and listing for the three identity kinds

use axum::{
    Form, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    auth,
    error::ApiError,
    models::{AuthorSignin, AuthorSignup, LoginRequest, ReaderSignin, ReaderSignup, SignupForm},
    state::AppState,
};

/// Register a generic user with a free-text role label
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = state
        .user_repository
        .find_by_username(&form.username)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up user: {}", e);
            ApiError::InternalServerError
        })?;

    if existing.is_some() {
        return Err(ApiError::DuplicateIdentity(
            "Username already registered".to_string(),
        ));
    }

    let user = state.user_repository.create(&form).await.map_err(|e| {
        tracing::error!("Failed to create user: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(json!({
        "message": format!(
            "User {} with role {} created successfully",
            user.username, user.role
        )
    })))
}

/// Admin login, checked only against the configured credential pair
///
/// No database-backed login path exists for generic users.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.email == state.admin_email && payload.password == state.admin_password {
        Ok(Json(json!({"message": "Login successful"})))
    } else {
        Err(ApiError::InvalidCredentials)
    }
}

/// Register a new reader
pub async fn reader_signup(
    State(state): State<AppState>,
    Json(payload): Json<ReaderSignup>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = state
        .reader_repository
        .find_by_email(&payload.email)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up reader: {}", e);
            ApiError::InternalServerError
        })?;

    if existing.is_some() {
        return Err(ApiError::DuplicateIdentity(
            "Email already registered".to_string(),
        ));
    }

    state.reader_repository.create(&payload).await.map_err(|e| {
        tracing::error!("Failed to create reader: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(json!({"message": "Signup successful"})))
}

/// Sign a reader in, returning their name and id
pub async fn reader_signin(
    State(state): State<AppState>,
    Json(payload): Json<ReaderSignin>,
) -> Result<impl IntoResponse, ApiError> {
    let reader = state
        .reader_repository
        .find_by_email(&payload.email)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up reader: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::InvalidCredentials)?;

    let verified =
        auth::verify_password(&payload.password, &reader.password_hash).map_err(|e| {
            tracing::error!("Failed to verify password: {}", e);
            ApiError::InternalServerError
        })?;

    if !verified {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(Json(json!({
        "message": "Login successful",
        "name": reader.name,
        "id": reader.id
    })))
}

/// Register a new author
pub async fn author_signup(
    State(state): State<AppState>,
    Json(payload): Json<AuthorSignup>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = state
        .author_repository
        .find_by_email(&payload.email)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up author: {}", e);
            ApiError::InternalServerError
        })?;

    if existing.is_some() {
        return Err(ApiError::DuplicateIdentity(
            "Email already registered".to_string(),
        ));
    }

    state.author_repository.create(&payload).await.map_err(|e| {
        tracing::error!("Failed to create author: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(json!({"message": "Signup successful"})))
}

/// Sign an author in, returning their name and id
pub async fn author_signin(
    State(state): State<AppState>,
    Json(payload): Json<AuthorSignin>,
) -> Result<impl IntoResponse, ApiError> {
    let author = state
        .author_repository
        .find_by_email(&payload.email)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up author: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::InvalidCredentials)?;

    let verified =
        auth::verify_password(&payload.password, &author.password_hash).map_err(|e| {
            tracing::error!("Failed to verify password: {}", e);
            ApiError::InternalServerError
        })?;

    if !verified {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(Json(json!({
        "message": "Login successful",
        "name": author.name,
        "id": author.id
    })))
}

/// Get all readers
pub async fn get_readers(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let readers = state.reader_repository.get_all().await.map_err(|e| {
        tracing::error!("Failed to get readers: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(readers))
}

/// Get all authors
pub async fn get_authors(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let authors = state.author_repository.get_all().await.map_err(|e| {
        tracing::error!("Failed to get authors: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(authors))
}

/// Get a reader by id
pub async fn get_reader(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let reader = state
        .reader_repository
        .find_by_id(&id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get reader: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Reader not found".to_string()))?;

    Ok(Json(reader))
}

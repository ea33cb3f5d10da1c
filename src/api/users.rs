//! User handlers: registration, login, and lookup.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::api::{validated, AppState};
use crate::auth::{hash_password, verify_password};
use crate::db::users;
use crate::error::{ApiError, Result};
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserEnvelope};

/// Handler for POST /api/users/register
pub async fn register_handler(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    validated(&req)?;

    if users::find_by_email(&state.db, &req.email).await?.is_some() {
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    let password_hash = hash_password(&req.password)?;
    let user = users::insert(&state.db, &req.name, &req.email, &password_hash, req.is_admin).await?;

    info!("Registered user {}", user.id);
    Ok((StatusCode::CREATED, Json(RegisterResponse::new(user))))
}

/// Handler for POST /api/users/login
pub async fn login_handler(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    validated(&req)?;

    let user = users::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound("User not found, you may have to register before login".to_string())
        })?;

    if !verify_password(&req.password, &user.password_hash)? {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = state.tokens.sign(&user)?;
    Ok(Json(LoginResponse::new(token)))
}

/// Handler for GET /api/users/:id
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserEnvelope>> {
    let user = users::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found!".to_string()))?;

    Ok(Json(UserEnvelope { user }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::test_state;

    fn register_req(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Alice".to_string(),
            email: email.to_string(),
            password: "hunter22".to_string(),
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let state = test_state().await;

        let (status, _) = register_handler(
            State(state.clone()),
            Json(register_req("alice@example.com")),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let login = login_handler(
            State(state.clone()),
            Json(LoginRequest {
                email: "alice@example.com".to_string(),
                password: "hunter22".to_string(),
            }),
        )
        .await
        .unwrap();

        let claims = state.tokens.verify(&login.token).unwrap();
        assert_eq!(claims.email, "alice@example.com");
        assert!(!claims.is_admin);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let state = test_state().await;

        register_handler(
            State(state.clone()),
            Json(register_req("alice@example.com")),
        )
        .await
        .unwrap();

        let dup = register_handler(State(state), Json(register_req("alice@example.com"))).await;
        assert!(matches!(dup, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let state = test_state().await;

        register_handler(
            State(state.clone()),
            Json(register_req("alice@example.com")),
        )
        .await
        .unwrap();

        let login = login_handler(
            State(state),
            Json(LoginRequest {
                email: "alice@example.com".to_string(),
                password: "wrong-password".to_string(),
            }),
        )
        .await;
        assert!(matches!(login, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let state = test_state().await;

        let login = login_handler(
            State(state),
            Json(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "hunter22".to_string(),
            }),
        )
        .await;
        assert!(matches!(login, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_user_missing() {
        let state = test_state().await;

        let result = get_user_handler(State(state), Path(404)).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}

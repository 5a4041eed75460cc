use actix_web::{HttpResponse, Result, web};
use sqlx::PgPool;
use validator::Validate;

use account_services::service::AccountService;
use account_services::types::*;

/// Handles user registration by validating the request, enforcing email
/// uniqueness, and persisting the new user.
///
/// Returns a 201 Created response with the public user fields.
pub async fn register_user(
    pool: web::Data<PgPool>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AccountError> {
    // Validate the request
    request
        .validate()
        .map_err(|e| AccountError::Validation(format!("Validation error: {}", e)))?;

    let account_service = AccountService::new(pool.get_ref().clone());
    let user = account_service.create_user(&request).await?;

    let response = AccountResponse {
        message: "User registered successfully".to_string(),
        user: user.to_user_info(),
    };

    Ok(HttpResponse::Created().json(response))
}

/// Handles user login by validating the request and verifying credentials.
///
/// An unknown email and a wrong password both return the same generic
/// invalid-credentials response.
pub async fn login_user(
    pool: web::Data<PgPool>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AccountError> {
    // Validate the request
    request
        .validate()
        .map_err(|e| AccountError::Validation(format!("Validation error: {}", e)))?;

    let account_service = AccountService::new(pool.get_ref().clone());
    let user = account_service
        .verify_credentials(&request.email, &request.password)
        .await?;

    let response = AccountResponse {
        message: "Login successful".to_string(),
        user: user.to_user_info(),
    };

    Ok(HttpResponse::Ok().json(response))
}

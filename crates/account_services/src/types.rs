use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request structure for user registration
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Name of the user
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    /// Email address of the user
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,

    /// Password for the user account
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    /// Phone number of the user
    pub phone: Option<String>,

    /// Account role, defaults to "renter" when omitted
    #[validate(custom(function = "validate_user_type"))]
    pub user_type: Option<String>,
}

/// Request structure for user login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address of the user
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,

    /// Password for the user account
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Information about the user, used in responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Unique identifier for the user
    pub id: i32,
    /// Name of the user
    pub name: String,
    /// Email address of the user
    pub email: String,
    /// Phone number of the user
    pub phone: Option<String>,
    /// Account role of the user
    pub user_type: String,
    /// Time at which the user was created
    pub created_at: DateTime<Utc>,
}

/// Response structure for registration and login
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Message indicating the result of the operation
    pub message: String,
    /// Public fields of the user
    pub user: UserInfo,
}

/// User model representing the database schema
#[derive(Debug, sqlx::FromRow)]
pub struct User {
    /// Unique identifier for the user
    pub id: i32,
    /// Name of the user
    pub name: String,
    /// Email address of the user
    pub email: String,
    /// Hashed password of the user
    pub password_hash: String,
    /// Phone number of the user (nullable)
    pub phone: Option<String>,
    /// Account role (one of "renter", "homeowner", "admin")
    pub user_type: String,
    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Projects the user into its public response shape, excluding the
    /// password hash.
    pub fn to_user_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            user_type: self.user_type.clone(),
            created_at: self.created_at,
        }
    }
}

/// Custom error type for account-related errors
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// The email address already exists in the system
    #[error("Email already exists")]
    EmailExists,

    /// The provided credentials are invalid
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The user was not found in the system
    #[error("User not found")]
    UserNotFound,

    /// An internal server error occurred
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An error occurred while validating input data
    #[error("Validation error: {0}")]
    Validation(String),
}

impl actix_web::ResponseError for AccountError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            AccountError::EmailExists => HttpResponse::Conflict().json(serde_json::json!({
                "error": "email_exists",
                "message": "User with this email already exists"
            })),
            AccountError::InvalidCredentials => {
                HttpResponse::Unauthorized().json(serde_json::json!({
                    "error": "invalid_credentials",
                    "message": "Invalid credentials"
                }))
            }
            AccountError::UserNotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": "user_not_found",
                "message": "User not found"
            })),
            AccountError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "validation_error",
                "message": msg
            })),
            AccountError::Database(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "internal_error",
                    "message": "An internal error occurred"
                }))
            }
        }
    }
}

/// Validates an account role value
pub fn validate_user_type(user_type: &str) -> Result<(), validator::ValidationError> {
    match user_type {
        "renter" | "homeowner" | "admin" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_user_type")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user_type() {
        assert!(validate_user_type("renter").is_ok());
        assert!(validate_user_type("homeowner").is_ok());
        assert!(validate_user_type("admin").is_ok());
        assert!(validate_user_type("guest").is_err());
        assert!(validate_user_type("").is_err());
    }

    #[test]
    fn test_register_request_requires_fields() {
        let request = RegisterRequest {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            password: "".to_string(),
            phone: None,
            user_type: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_register_request_accepts_optional_role() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"name":"Jane","email":"jane@example.com","password":"secret","userType":"homeowner"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.user_type.as_deref(), Some("homeowner"));
        assert!(request.phone.is_none());
    }

    #[test]
    fn test_user_info_excludes_password_hash() {
        let user = User {
            id: 7,
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "deadbeef".to_string(),
            phone: None,
            user_type: "renter".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(user.to_user_info()).unwrap();
        assert_eq!(value["userType"], "renter");
        assert_eq!(value["phone"], serde_json::Value::Null);
        assert!(value.get("passwordHash").is_none());
        assert!(value.get("password_hash").is_none());
    }
}

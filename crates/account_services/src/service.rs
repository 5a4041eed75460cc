use sha2::{Digest, Sha256};
use sqlx::PgPool;

use crate::types::{AccountError, RegisterRequest, User};

/// A service for handling user account operations such as registering users
/// and verifying login credentials.
pub struct AccountService {
    pool: PgPool,
}

impl AccountService {
    /// Creates a new instance of `AccountService` with the provided database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a new user in the database with the provided registration request.
    pub async fn create_user(&self, request: &RegisterRequest) -> Result<User, AccountError> {
        let email = request.email.to_lowercase();

        // Check if email already exists
        let existing_user = sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(&self.pool)
            .await?;

        if existing_user.is_some() {
            return Err(AccountError::EmailExists);
        }

        let password_hash = hash_password(&request.password);
        let user_type = request.user_type.as_deref().unwrap_or("renter");

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                name, email, password_hash, phone, user_type
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING
                id, name, email, password_hash, phone, user_type,
                created_at, updated_at
            "#,
        )
        .bind(request.name.trim())
        .bind(email.trim())
        .bind(&password_hash)
        .bind(&request.phone)
        .bind(user_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Retrieves a user by their email address, returning `None` if not found.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AccountError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT
                id, name, email, password_hash, phone, user_type,
                created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.to_lowercase())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Verifies the supplied credentials against the stored password hash.
    ///
    /// An unknown email and a wrong password both return
    /// [`AccountError::InvalidCredentials`] so callers cannot probe which
    /// field was wrong.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, AccountError> {
        let user = self
            .get_user_by_email(email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if hash_password(password) != user.password_hash {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(user)
    }
}

/// Computes the hex-encoded SHA-256 digest of a password.
///
/// Single unsalted pass, kept byte-compatible with the records the original
/// deployment wrote. Login equality depends on this function being
/// deterministic.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_is_deterministic() {
        assert_eq!(hash_password("secret"), hash_password("secret"));
        assert_ne!(hash_password("secret"), hash_password("Secret"));
    }

    #[test]
    fn test_hash_password_known_vector() {
        // SHA-256("abc")
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_password_is_hex_encoded() {
        let digest = hash_password("anything");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

use account_services::types::User;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Slip model representing the database schema
#[derive(Debug, sqlx::FromRow)]
pub struct Slip {
    /// Unique identifier for the slip
    pub id: i32,
    /// Display name of the slip
    pub name: String,
    /// Maximum boat length the slip accommodates, in feet
    pub max_length: f64,
    /// Width of the slip in feet
    pub width: f64,
    /// Water depth at the slip in feet
    pub depth: f64,
    /// Nightly price in dollars
    pub price_per_night: f64,
    /// Amenities offered at the slip
    pub amenities: Vec<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Dock etiquette text shown to renters
    pub dock_etiquette: Option<String>,
    /// Advisory availability flag, not checked against bookings
    pub available: bool,
    /// Image URLs for the slip
    pub images: Vec<String>,
    /// Timestamp when the slip was created
    pub created_at: DateTime<Utc>,
    /// Timestamp when the slip was last updated
    pub updated_at: DateTime<Utc>,
}

impl Slip {
    /// Projects the slip into its client-facing record shape.
    pub fn to_record(&self) -> SlipRecord {
        SlipRecord {
            id: self.id,
            name: self.name.clone(),
            max_length: self.max_length,
            width: self.width,
            depth: self.depth,
            price_per_night: self.price_per_night,
            amenities: self.amenities.clone(),
            description: self.description.clone(),
            dock_etiquette: self.dock_etiquette.clone(),
            available: self.available,
            images: self.images.clone(),
        }
    }
}

/// Client-facing slip projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlipRecord {
    /// Unique identifier for the slip
    pub id: i32,
    /// Display name of the slip
    pub name: String,
    /// Maximum boat length the slip accommodates, in feet
    pub max_length: f64,
    /// Width of the slip in feet
    pub width: f64,
    /// Water depth at the slip in feet
    pub depth: f64,
    /// Nightly price in dollars
    pub price_per_night: f64,
    /// Amenities offered at the slip
    pub amenities: Vec<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Dock etiquette text shown to renters
    pub dock_etiquette: Option<String>,
    /// Advisory availability flag
    pub available: bool,
    /// Image URLs for the slip
    pub images: Vec<String>,
}

/// Client-facing user projection, excluding the password hash
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique identifier for the user
    pub id: i32,
    /// Name of the user
    pub name: String,
    /// Email address of the user
    pub email: String,
    /// Account role of the user
    pub user_type: String,
    /// Phone number of the user
    pub phone: Option<String>,
    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Builds a user projection from the account model.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            user_type: user.user_type.clone(),
            phone: user.phone.clone(),
            created_at: user.created_at,
        }
    }
}

/// Response structure for listing slips
#[derive(Debug, Serialize)]
pub struct ListSlipsResponse {
    /// List of slip projections
    pub slips: Vec<SlipRecord>,
}

/// Response structure for listing users
#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    /// List of user projections
    pub users: Vec<UserRecord>,
}

/// Custom error type for catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl actix_web::ResponseError for CatalogError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            CatalogError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "validation_error",
                "message": msg
            })),
            CatalogError::Database(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "internal_error",
                    "message": "An internal error occurred"
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_slip() -> Slip {
        Slip {
            id: 1,
            name: "Dockmaster Slip".to_string(),
            max_length: 26.0,
            width: 10.0,
            depth: 6.0,
            price_per_night: 60.0,
            amenities: vec!["Water".to_string(), "Electric".to_string()],
            description: Some("Prime waterfront slip".to_string()),
            dock_etiquette: None,
            available: true,
            images: vec!["https://example.com/slip.jpg".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_slip_record_renames_fields() {
        let value = serde_json::to_value(sample_slip().to_record()).unwrap();

        assert_eq!(value["maxLength"], 26.0);
        assert_eq!(value["pricePerNight"], 60.0);
        assert_eq!(value["dockEtiquette"], serde_json::Value::Null);
        assert_eq!(value["available"], true);
        assert!(value.get("price_per_night").is_none());
    }

    #[test]
    fn test_amenities_round_trip_ordered() {
        let slip = sample_slip();
        let value = serde_json::to_value(slip.to_record()).unwrap();
        let amenities: Vec<String> = serde_json::from_value(value["amenities"].clone()).unwrap();

        assert_eq!(amenities, vec!["Water".to_string(), "Electric".to_string()]);
    }
}

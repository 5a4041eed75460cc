use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, Result, web};
use serde::{Deserialize, Serialize};

use payments::StripeClient;

use crate::catalog_types::CatalogError;

/// Number of slips the bulk image stub pretends to update.
const STUB_UPDATED_COUNT: i64 = 12;

/// Request structure for the single-slip image stub
#[derive(Debug, Deserialize)]
pub struct UpdateSlipImagesRequest {
    /// Slip whose image would be replaced
    pub slip_id: Option<i32>,
    /// URL of the new image
    pub image_url: Option<String>,
}

/// Request structure for the bulk image stub
#[derive(Debug, Deserialize)]
pub struct UpdateAllSlipImagesRequest {
    /// URL of the new image
    pub image_url: Option<String>,
}

/// Response structure for the image stubs
#[derive(Debug, Serialize)]
pub struct UpdateSlipImagesResponse {
    /// Always true when validation passes
    pub success: bool,
    /// Message indicating the result of the operation
    pub message: String,
    /// Slip echoed back, absent for the bulk stub
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slip_id: Option<i32>,
    /// Image URL echoed back
    pub image_url: String,
    /// Number of slips reported updated, bulk stub only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_count: Option<i64>,
}

/// Health check endpoint
pub async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "message": "Dock Rental API is working!"
    })))
}

/// Debug endpoint reporting whether the payment processor key is configured
pub async fn debug_status(stripe: web::Data<StripeClient>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "timestamp": chrono::Utc::now(),
        "stripe_configured": stripe.is_configured(),
        "stripe_key_prefix": stripe.key_prefix(),
        "message": "Dock Rental API is running"
    })))
}

/// Stub endpoint for replacing a single slip's image.
///
/// Validates presence of `slip_id` and `image_url` but performs no
/// persistence.
pub async fn update_slip_images(
    request: web::Json<UpdateSlipImagesRequest>,
) -> Result<HttpResponse, CatalogError> {
    let (Some(slip_id), Some(image_url)) = (request.slip_id, request.image_url.clone()) else {
        return Err(CatalogError::Validation(
            "slip_id and image_url are required".to_string(),
        ));
    };

    Ok(HttpResponse::Ok().json(UpdateSlipImagesResponse {
        success: true,
        message: format!("Slip {} image updated successfully", slip_id),
        slip_id: Some(slip_id),
        image_url,
        updated_count: None,
    }))
}

/// Stub endpoint for replacing every slip's image.
///
/// Validates presence of `image_url` and reports a hardcoded updated count.
pub async fn update_all_slip_images(
    request: web::Json<UpdateAllSlipImagesRequest>,
) -> Result<HttpResponse, CatalogError> {
    let Some(image_url) = request.image_url.clone() else {
        return Err(CatalogError::Validation("image_url is required".to_string()));
    };

    Ok(HttpResponse::Ok().json(UpdateSlipImagesResponse {
        success: true,
        message: "All slip images updated successfully".to_string(),
        slip_id: None,
        image_url,
        updated_count: Some(STUB_UPDATED_COUNT),
    }))
}

/// Fallback for unknown routes and CORS preflight.
///
/// OPTIONS requests get an empty 200 so browser preflight always succeeds;
/// everything else gets the not-found shape with the requested path.
pub async fn fallback(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return HttpResponse::Ok().finish();
    }

    HttpResponse::NotFound().json(serde_json::json!({
        "error": "Endpoint not found",
        "path": req.path()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_update_slip_images_requires_both_fields() {
        let request = UpdateSlipImagesRequest {
            slip_id: Some(3),
            image_url: None,
        };

        let result = update_slip_images(web::Json(request)).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[actix_web::test]
    async fn test_update_all_slip_images_reports_stub_count() {
        let request = UpdateAllSlipImagesRequest {
            image_url: Some("https://example.com/new.jpg".to_string()),
        };

        let response = update_all_slip_images(web::Json(request)).await.unwrap();
        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["updated_count"], 12);
        assert!(value.get("slip_id").is_none());
    }
}

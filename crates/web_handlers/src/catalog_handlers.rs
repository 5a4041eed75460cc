use actix_web::{HttpResponse, Result, web};
use sqlx::PgPool;

use crate::booking_service::BookingService;
use crate::booking_types::{BookingError, ListBookingsResponse};
use crate::catalog_service::CatalogService;
use crate::catalog_types::*;

/// Lists all slips as client-facing projections
pub async fn list_slips(pool: web::Data<PgPool>) -> Result<HttpResponse, CatalogError> {
    let catalog_service = CatalogService::new(pool.get_ref().clone());
    let slips = catalog_service.get_slips().await?;

    let response = ListSlipsResponse {
        slips: slips.iter().map(Slip::to_record).collect(),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Lists all users as public projections
pub async fn list_users(pool: web::Data<PgPool>) -> Result<HttpResponse, CatalogError> {
    let catalog_service = CatalogService::new(pool.get_ref().clone());
    let users = catalog_service.get_users().await?;

    let response = ListUsersResponse {
        users: users.iter().map(UserRecord::from_user).collect(),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Lists all bookings with their slip names inlined
pub async fn list_bookings(pool: web::Data<PgPool>) -> Result<HttpResponse, BookingError> {
    let booking_service = BookingService::new(pool.get_ref().clone());
    let bookings = booking_service.get_all_bookings().await?;

    Ok(HttpResponse::Ok().json(ListBookingsResponse { bookings }))
}

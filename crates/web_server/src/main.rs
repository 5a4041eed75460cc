//! Main entry point for the dock rental backend server.
//! This crate wires configuration, the database pool, and the payment client
//! into the REST API.

use actix_web::{App, HttpServer, middleware, web};
use payments::StripeClient;
use postgres::database::*;
use postgres::schema::*;
use web_handlers::*;

mod config;
use config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("Starting dock rental server...");

    // Absence of the payment key is fatal at process start
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Create database connection pool
    let pool = match create_connection_pool(&config.database_url).await {
        Ok(pool) => {
            log::info!("Database pool created successfully");

            if let Err(e) = test_connection(&pool).await {
                log::error!("Database connection test failed: {}", e);
            }
            pool
        }
        Err(e) => {
            log::error!("Failed to create database pool: {}", e);
            log::error!("Make sure PostgreSQL is running and DATABASE_URL is set");
            std::process::exit(1);
        }
    };

    // Create tables and seed sample data
    if let Err(e) = create_tables(&pool).await {
        log::error!("Database schema creation failed: {}", e);
    }
    if let Err(e) = init_db(&pool).await {
        log::error!("Database initialization failed: {}", e);
    }

    // Create payment processor client
    let stripe_client = match StripeClient::new(config.stripe_secret_key.clone()) {
        Ok(client) => {
            log::info!("Payment client initialized ({})", client.key_prefix());
            client
        }
        Err(e) => {
            log::error!("Failed to initialize payment client: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Server will be available at: http://{}", config.bind_addr);

    let bind_addr = config.bind_addr.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(stripe_client.clone()))
            .wrap(middleware::Logger::default())
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
                    .add(("Access-Control-Allow-Headers", "Content-Type, Authorization"))
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-XSS-Protection", "1; mode=block"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin"))
                    .add(("Content-Security-Policy", "default-src 'self'")),
            )
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(health))
                    .route("/debug/status", web::get().to(debug_status))
                    .route("/slips", web::get().to(list_slips))
                    .route("/users", web::get().to(list_users))
                    .route("/bookings", web::get().to(list_bookings))
                    .route(
                        "/create-payment-intent",
                        web::post().to(create_payment_intent),
                    )
                    .route("/confirm-payment", web::post().to(confirm_payment))
                    .route("/update-slip-images", web::post().to(update_slip_images))
                    .route(
                        "/update-all-slip-images",
                        web::post().to(update_all_slip_images),
                    )
                    .route("/register-user", web::post().to(register_user))
                    .route("/login-user", web::post().to(login_user))
                    .route("/create-booking", web::post().to(create_booking))
                    .default_service(web::route().to(fallback)),
            )
            .default_service(web::route().to(fallback))
    })
    .bind(bind_addr)?
    .run()
    .await
}

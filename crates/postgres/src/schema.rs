use sqlx::{PgPool, Row};

/// Creates all application tables if they do not exist yet.
pub async fn create_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            phone TEXT,
            user_type TEXT NOT NULL DEFAULT 'renter',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS slips (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            max_length DOUBLE PRECISION NOT NULL,
            width DOUBLE PRECISION NOT NULL,
            depth DOUBLE PRECISION NOT NULL,
            price_per_night DOUBLE PRECISION NOT NULL,
            amenities TEXT[] NOT NULL DEFAULT '{}',
            description TEXT,
            dock_etiquette TEXT,
            available BOOLEAN NOT NULL DEFAULT TRUE,
            images TEXT[] NOT NULL DEFAULT '{}',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id SERIAL PRIMARY KEY,
            slip_id INTEGER NOT NULL REFERENCES slips(id),
            user_id INTEGER NOT NULL REFERENCES users(id),
            guest_name TEXT NOT NULL,
            guest_email TEXT NOT NULL,
            guest_phone TEXT,
            check_in TIMESTAMPTZ NOT NULL,
            check_out TIMESTAMPTZ NOT NULL,
            boat_length DOUBLE PRECISION,
            boat_make_model TEXT,
            user_type TEXT NOT NULL DEFAULT 'renter',
            nights INTEGER NOT NULL,
            total_cost DOUBLE PRECISION NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            booking_date TIMESTAMPTZ NOT NULL,
            payment_status TEXT NOT NULL DEFAULT 'pending',
            payment_method TEXT NOT NULL DEFAULT 'stripe',
            payment_date TIMESTAMPTZ,
            rental_agreement_name TEXT,
            insurance_proof_name TEXT,
            rental_property TEXT,
            rental_start_date TIMESTAMPTZ,
            rental_end_date TIMESTAMPTZ,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Seeds the database with sample slips and an admin user.
///
/// Runs only when the `slips` table is empty so repeated startups do not
/// duplicate data.
pub async fn init_db(pool: &PgPool) -> Result<(), sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) as count FROM slips")
        .fetch_one(pool)
        .await?;
    let slip_count: i64 = row.get("count");

    if slip_count > 0 {
        return Ok(());
    }

    let etiquette = "Dock Slip Rental Rules\n\n\
        1. Be courteous to our neighborhood. Respect fellow boaters and the dock community.\n\
        2. Mind the tides when tying up. Leave enough slack for extreme water level changes.\n\
        3. Pack it in, pack it out. Take everything you brought with you when you leave.\n\
        4. Clean up after yourself. Leave shared facilities ready for the next person.\n\
        5. Use only your assigned slip. Stay in your designated slip number.";

    let sample_slips = [
        (
            "Dockmaster Slip",
            "Prime waterfront slip with easy access to main channel",
            true,
        ),
        ("Slip 2", "Convenient slip close to parking area", false),
    ];

    for (name, description, available) in sample_slips {
        sqlx::query(
            r#"
            INSERT INTO slips (
                name, max_length, width, depth, price_per_night,
                amenities, description, dock_etiquette, available, images
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(name)
        .bind(26.0_f64)
        .bind(10.0_f64)
        .bind(6.0_f64)
        .bind(60.0_f64)
        .bind(vec!["Water".to_string(), "Electric (120V)".to_string()])
        .bind(description)
        .bind(etiquette)
        .bind(available)
        .bind(vec![
            "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=800&h=600&fit=crop&crop=center"
                .to_string(),
        ])
        .execute(pool)
        .await?;
    }

    // The booking fallback user id points at this record, so it must be the
    // first row inserted into an empty users table.
    sqlx::query(
        r#"
        INSERT INTO users (name, email, password_hash, phone, user_type)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind("Admin User")
    .bind("admin@dock82.com")
    .bind("admin_hash_placeholder")
    .bind("555-0123")
    .bind("admin")
    .execute(pool)
    .await?;

    log::info!("Database initialized with sample data");

    Ok(())
}

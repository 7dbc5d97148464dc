//! Database migration runner for Cambio.
//!
//! Usage: cargo run --bin migrator

use sea_orm_migration::MigratorTrait;

use cambio_db::migration::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = cambio_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Running migrations...");
    Migrator::up(&db, None).await.expect("Migration failed");

    println!("Migrations complete!");
}

//! Database seeder for Cambio development and testing.
//!
//! Seeds a handful of currencies plus USD-relative exchange rates so the
//! fallback chain (direct, reverse, cross via USD) has data to work with.
//!
//! Usage: cargo run --bin seeder

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use cambio_db::entities::{currencies, exchange_rates};

/// Currencies to seed: (code, name, sign).
const CURRENCIES: [(&str, &str, &str); 6] = [
    ("USD", "US Dollar", "$"),
    ("EUR", "Euro", "\u{20ac}"),
    ("GBP", "Pound Sterling", "\u{a3}"),
    ("JPY", "Japanese Yen", "\u{a5}"),
    ("AUD", "Australian Dollar", "A$"),
    ("CHF", "Swiss Franc", "Fr"),
];

/// USD-relative rates (approximate values for testing).
const RATES: [(&str, &str); 5] = [
    ("EUR", "0.9200"),
    ("GBP", "0.7900"),
    ("JPY", "149.5000"),
    ("AUD", "1.5300"),
    ("CHF", "0.8800"),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = cambio_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding currencies...");
    let ids = seed_currencies(&db).await;

    println!("Seeding exchange rates...");
    seed_exchange_rates(&db, &ids).await;

    println!("Seeding complete!");
}

/// Seeds the currency table, returning code -> id for rows that exist afterwards.
async fn seed_currencies(db: &DatabaseConnection) -> HashMap<String, i64> {
    let mut ids = HashMap::new();
    let mut inserted = 0;

    for (code, name, sign) in CURRENCIES {
        let existing = currencies::Entity::find()
            .filter(currencies::Column::Code.eq(code))
            .one(db)
            .await
            .ok()
            .flatten();

        if let Some(row) = existing {
            ids.insert(code.to_string(), row.id);
            continue;
        }

        let currency = currencies::ActiveModel {
            id: NotSet,
            code: Set(code.to_string()),
            name: Set(name.to_string()),
            sign: Set(sign.to_string()),
        };

        match currency.insert(db).await {
            Ok(row) => {
                ids.insert(code.to_string(), row.id);
                inserted += 1;
            }
            Err(e) => eprintln!("Failed to insert currency {code}: {e}"),
        }
    }

    println!("  Inserted {inserted} currencies");
    ids
}

/// Seeds USD -> X exchange rates, skipping pairs that already exist.
async fn seed_exchange_rates(db: &DatabaseConnection, ids: &HashMap<String, i64>) {
    let Some(&usd_id) = ids.get("USD") else {
        eprintln!("USD currency missing, skipping exchange rates");
        return;
    };

    let mut inserted = 0;
    for (target_code, rate) in RATES {
        let Some(&target_id) = ids.get(target_code) else {
            eprintln!("Currency {target_code} missing, skipping its rate");
            continue;
        };

        let rate_value = Decimal::from_str(rate).expect("seed rate literal is valid");

        let exchange_rate = exchange_rates::ActiveModel {
            id: NotSet,
            base_currency_id: Set(usd_id),
            target_currency_id: Set(target_id),
            rate: Set(rate_value),
        };

        if let Err(e) = exchange_rate.insert(db).await {
            // Ignore duplicate key errors (rate already exists)
            if !e.to_string().contains("duplicate key") {
                eprintln!("Failed to insert exchange rate USD-{target_code}: {e}");
            }
        } else {
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} exchange rates");
}

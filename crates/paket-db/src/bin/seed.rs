//! # Seed Data Generator
//!
//! Populates the database with demo data for development.
//!
//! ## Usage
//! ```bash
//! # Seed into ./paket.db (default)
//! cargo run -p paket-db --bin seed
//!
//! # Specify database path
//! cargo run -p paket-db --bin seed -- --db ./data/paket.db
//! ```
//!
//! ## Generated Data
//! - A small courier roster
//! - A handful of packages with generated tracking numbers and addresses
//! - Reviews referencing some of those packages

use std::env;

use paket_core::{generate_tracking_number, NewCourier, NewPackage, NewReview};
use paket_db::{Database, DbConfig};

/// Demo couriers: (name, phone, email)
const COURIERS: &[(&str, &str, &str)] = &[
    ("Алексей Смирнов", "+7 901 111-22-33", "a.smirnov@paket.example"),
    ("Борис Кузнецов", "+7 902 222-33-44", "b.kuznetsov@paket.example"),
    ("Виктория Орлова", "+7 903 333-44-55", "v.orlova@paket.example"),
];

/// Demo packages: (description, sender, recipient, sender address, recipient address)
const PACKAGES: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Книги",
        "Иван Петров",
        "Мария Сидорова",
        "Москва, ул. Ленина, 1",
        "Санкт-Петербург, Невский пр., 10",
    ),
    (
        "Ноутбук",
        "ООО «Техника»",
        "Павел Волков",
        "Екатеринбург, пр. Мира, 5",
        "Казань, ул. Баумана, 20",
    ),
    (
        "Документы",
        "Анна Козлова",
        "Нотариус Фролова",
        "Новосибирск, Красный пр., 2",
        "Новосибирск, ул. Советская, 14",
    ),
];

/// Demo reviews: (customer, rating, comment); tracking numbers are attached
/// to the seeded packages in order.
const REVIEWS: &[(&str, i64, &str)] = &[
    ("Мария Сидорова", 5, "Быстрая доставка, всё целое"),
    ("Павел Волков", 3, "Долго, но довезли"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse --db argument, default to ./paket.db
    let args: Vec<String> = env::args().collect();
    let db_path = args
        .iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
        .unwrap_or("./paket.db");

    println!("Seeding demo data into {db_path}");

    let db = Database::new(DbConfig::new(db_path)).await?;

    for (name, phone, email) in COURIERS {
        db.couriers()
            .insert(&NewCourier {
                name: (*name).to_string(),
                phone: (*phone).to_string(),
                email: (*email).to_string(),
            })
            .await?;
    }
    println!("Inserted {} couriers", COURIERS.len());

    let mut tracking_numbers = Vec::new();
    for (description, sender, recipient, sender_address, recipient_address) in PACKAGES {
        let package = db
            .packages()
            .insert(&NewPackage {
                tracking_number: generate_tracking_number(),
                description: (*description).to_string(),
                sender: (*sender).to_string(),
                recipient: (*recipient).to_string(),
                sender_address: (*sender_address).to_string(),
                recipient_address: (*recipient_address).to_string(),
            })
            .await?;
        println!("  {} -> {}", package.tracking_number, package.recipient);
        tracking_numbers.push(package.tracking_number);
    }
    println!("Inserted {} packages", PACKAGES.len());

    for (i, (customer, rating, comment)) in REVIEWS.iter().enumerate() {
        db.reviews()
            .insert(&NewReview {
                tracking_number: tracking_numbers.get(i).cloned(),
                customer_name: (*customer).to_string(),
                rating: *rating,
                comment: (*comment).to_string(),
            })
            .await?;
    }
    println!("Inserted {} reviews", REVIEWS.len());

    db.close().await;
    println!("Done");
    Ok(())
}

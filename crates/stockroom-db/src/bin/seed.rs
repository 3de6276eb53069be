//! # Seed Data Generator
//!
//! Populates the database with demo clients and products for development.
//!
//! ## Usage
//! ```bash
//! # Default database ./stockroom_dev.db, 25 clients
//! cargo run -p stockroom-db --bin seed
//!
//! # Custom client count and database path
//! cargo run -p stockroom-db --bin seed -- --clients 100 --db ./data/stockroom.db
//! ```
//!
//! Products come from a fixed catalogue with stock between 0 and 95, so a
//! few items are always sold out.

use std::env;

use stockroom_core::{NewClient, NewProduct};
use stockroom_db::{ClientStore, Database, DbConfig, ProductStore};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carla", "Dan", "Erika", "Farid", "Greta", "Hugo", "Ines", "Jonas",
];

const LAST_NAMES: &[&str] = &["Ionescu", "Muller", "Novak", "Popescu", "Szabo"];

const CATALOGUE: &[&str] = &[
    "Widget",
    "Gadget",
    "Sprocket",
    "Gear",
    "Bolt M6",
    "Bolt M8",
    "Hex Nut",
    "Washer",
    "Bearing 608",
    "Spring",
    "Hinge",
    "Bracket",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut clients: usize = 25;
    let mut db_path = String::from("./stockroom_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--clients" | "-c" => {
                if let Some(value) = args.get(i + 1) {
                    clients = value.parse()?;
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if let Some(value) = args.get(i + 1) {
                    db_path = value.clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --clients <N>  Number of clients to generate (default: 25)");
                println!("  -d, --db <PATH>    Database file path (default: ./stockroom_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database, migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    let products = db.products();
    for (idx, name) in CATALOGUE.iter().enumerate() {
        let quantity = ((idx * 37) % 20 * 5) as i64;
        products.insert(&NewProduct::new(*name, quantity)).await?;
    }
    println!("✓ Inserted {} products", CATALOGUE.len());

    let client_repo = db.clients();
    for n in 0..clients {
        let first = FIRST_NAMES[n % FIRST_NAMES.len()];
        let last = LAST_NAMES[(n / FIRST_NAMES.len()) % LAST_NAMES.len()];
        client_repo
            .insert(&NewClient::new(format!("{} {}", first, last)))
            .await?;
    }
    println!("✓ Inserted {} clients", clients);

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

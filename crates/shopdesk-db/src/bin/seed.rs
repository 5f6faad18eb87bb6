//! # Seed Data Generator
//!
//! Populates the database with shops, products and a year of orders so both
//! views of the app have something to show.
//!
//! ## Usage
//! ```bash
//! # Defaults: 8 shops, 200 products, 2,000 orders in 2025
//! cargo run -p shopdesk-db --bin seed
//!
//! # Custom amounts
//! cargo run -p shopdesk-db --bin seed -- --products 500 --orders 10000
//!
//! # Specify database path and year
//! cargo run -p shopdesk-db --bin seed -- --db ./data/shopdesk.db --year 2024
//! ```
//!
//! Values are derived from the loop index, so two runs with the same
//! arguments produce the same data.

use chrono::NaiveDate;
use shopdesk_core::{NewOrderLine, OrderStatus, ProductInput, DEFAULT_REPORT_YEAR, DEFAULT_SHOP_ID};
use shopdesk_db::{Database, DbConfig};
use std::env;

/// Extra shops created next to the default shop.
const SHOP_NAMES: &[&str] = &[
    "Corner Books",
    "Saigon Ceramics",
    "Hanoi Tea House",
    "Blue Lotus Crafts",
    "Mekong Outfitters",
    "Dalat Flowers",
    "Hue Silk",
];

/// Product families with a base price in whole currency units.
const CATALOG: &[(&str, i64)] = &[
    ("Ceramic Mug", 120_000),
    ("Lotus Tea", 85_000),
    ("Silk Scarf", 450_000),
    ("Bamboo Basket", 150_000),
    ("Notebook", 30_000),
    ("Lacquer Box", 320_000),
    ("Coffee Filter", 45_000),
    ("Rattan Lamp", 600_000),
    ("Incense Set", 60_000),
    ("Canvas Tote", 95_000),
];

const VARIANTS: &[&str] = &["Small", "Medium", "Large", "Classic", "Deluxe"];

struct Args {
    db_path: String,
    shops: usize,
    products: usize,
    orders: usize,
    year: i32,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            db_path: String::from("./shopdesk_dev.db"),
            shops: SHOP_NAMES.len(),
            products: 200,
            orders: 2_000,
            year: DEFAULT_REPORT_YEAR,
        }
    }
}

fn parse_args() -> Args {
    let argv: Vec<String> = env::args().collect();
    let mut args = Args::default();

    let mut i = 1;
    while i < argv.len() {
        let value = argv.get(i + 1);
        match (argv[i].as_str(), value) {
            ("--db" | "-d", Some(v)) => args.db_path = v.clone(),
            ("--shops", Some(v)) => args.shops = v.parse().unwrap_or(args.shops),
            ("--products" | "-p", Some(v)) => args.products = v.parse().unwrap_or(args.products),
            ("--orders" | "-o", Some(v)) => args.orders = v.parse().unwrap_or(args.orders),
            ("--year" | "-y", Some(v)) => args.year = v.parse().unwrap_or(args.year),
            ("--help" | "-h", _) => {
                println!(
                    "Usage: seed [--db PATH] [--shops N] [--products N] [--orders N] [--year YYYY]"
                );
                std::process::exit(0);
            }
            (other, _) => {
                eprintln!("Ignoring unknown argument: {other}");
                i += 1;
                continue;
            }
        }
        i += 2;
    }

    args.shops = args.shops.min(SHOP_NAMES.len());
    args
}

/// Builds the product form input for catalog slot `seed`.
fn product_input(seed: usize) -> ProductInput {
    let (family, base_price) = CATALOG[seed % CATALOG.len()];
    let variant = VARIANTS[(seed / CATALOG.len()) % VARIANTS.len()];

    // +0% .. +45% in 5% steps
    let markup = ((seed * 7) % 10) as i64 * 5;
    let price = base_price + base_price * markup / 100;

    ProductInput {
        name: format!("{family} {variant} #{seed:03}"),
        description: Some(format!("{variant} {} from the seed catalog", family.to_lowercase())),
        original_price: price,
        stock: ((seed * 13) % 150) as i64,
    }
}

/// Spreads order `n` over the year.
fn order_date(year: i32, n: usize) -> NaiveDate {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap_or(start);
    let days_in_year = (end - start).num_days().max(1) as usize;
    start + chrono::Duration::days(((n * 37) % days_in_year) as i64)
}

/// 80% completed, 15% pending, 5% cancelled.
fn order_status(n: usize) -> OrderStatus {
    match n % 20 {
        0 => OrderStatus::Cancelled,
        1..=3 => OrderStatus::Pending,
        _ => OrderStatus::Completed,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args();

    println!("🌱 Shopdesk seed");
    println!("   Database: {}", args.db_path);
    println!(
        "   Shops: {}  Products: {}  Orders: {}  Year: {}",
        args.shops + 1,
        args.products,
        args.orders,
        args.year
    );

    let db = Database::new(DbConfig::new(&args.db_path)).await?;

    // Shops (shop 1 comes from the initial migration)
    let mut shop_ids = vec![DEFAULT_SHOP_ID];
    let existing = db.shops().list().await?;
    for name in SHOP_NAMES.iter().take(args.shops) {
        let id = match existing.iter().find(|s| s.name == *name) {
            Some(shop) => shop.id,
            None => db.shops().insert(name).await?,
        };
        shop_ids.push(id);
    }
    println!("✓ {} shops ready", shop_ids.len());

    // Products
    let created_at = NaiveDate::from_ymd_opt(args.year, 1, 1).unwrap_or_default();
    let mut products = Vec::with_capacity(args.products);
    for seed in 0..args.products {
        let input = product_input(seed).validated()?;
        let shop_id = shop_ids[seed % shop_ids.len()];
        let id = db.products().insert(shop_id, &input, created_at).await?;
        products.push((id, input.original_price));

        if (seed + 1) % 100 == 0 {
            println!("  ... {} products", seed + 1);
        }
    }
    println!("✓ {} products inserted", products.len());

    if products.is_empty() {
        println!("No products, skipping orders");
        return Ok(());
    }

    // Orders: 1-3 lines each
    for n in 0..args.orders {
        let shop_id = shop_ids[(n * 5 + n / 7) % shop_ids.len()];
        let line_count = 1 + n % 3;
        let lines: Vec<NewOrderLine> = (0..line_count)
            .map(|k| {
                let (product_id, price) = products[(n * 11 + k * 3) % products.len()];
                NewOrderLine {
                    product_id,
                    quantity: 1 + ((n + k) % 4) as i64,
                    unit_price: price,
                }
            })
            .collect();

        db.orders()
            .create(shop_id, order_status(n), order_date(args.year, n), &lines)
            .await?;

        if (n + 1) % 500 == 0 {
            println!("  ... {} orders", n + 1);
        }
    }
    println!("✓ {} orders inserted", args.orders);

    let top = db.reports().high_revenue_shops(args.year, 0).await?;
    if let Some(best) = top.first() {
        println!(
            "🏆 Top shop in {}: {} ({} orders, revenue {})",
            args.year, best.shop_name, best.order_count, best.total_revenue
        );
    }

    db.close().await;
    Ok(())
}

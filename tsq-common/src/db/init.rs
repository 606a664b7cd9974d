//! Database initialization
//!
//! Creates the schema on first run and seeds a small starter directory so
//! the application feels alive on first launch. Safe to call repeatedly.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Reviews reference businesses with ON DELETE CASCADE
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL keeps readers open while a review write commits
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_businesses_table(&pool).await?;
    create_reviews_table(&pool).await?;

    seed_starter_businesses(&pool).await?;

    Ok(pool)
}

/// Create the businesses table
///
/// `average_rating` and `review_count` are derived columns, rewritten from
/// the full review set on every review insert.
async fn create_businesses_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS businesses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            category TEXT NOT NULL CHECK (category IN ('Food', 'Retail', 'Services')),
            deal_text TEXT NOT NULL DEFAULT '',
            average_rating REAL NOT NULL DEFAULT 0.0,
            review_count INTEGER NOT NULL DEFAULT 0,
            is_favorite INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (length(name) > 0),
            CHECK (review_count >= 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_businesses_category ON businesses(category)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_businesses_favorite ON businesses(is_favorite)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create the reviews table
async fn create_reviews_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            business_id INTEGER NOT NULL REFERENCES businesses(id) ON DELETE CASCADE,
            rating INTEGER NOT NULL CHECK (rating >= 1 AND rating <= 5),
            text TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_reviews_business_id ON reviews(business_id)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Insert a small starter set when the directory is empty
async fn seed_starter_businesses(pool: &SqlitePool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM businesses")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let starter_businesses = [
        ("Sunrise Café", "Food", "Buy 1 breakfast, get 2nd 50% off"),
        ("Corner Book Nook", "Retail", "10% off local authors"),
        ("Sparkle Cleaners", "Services", "First shirt pressed for free"),
        ("Green Leaf Market", "Food", "Free fruit sample with purchase"),
        ("TechFix Repair", "Services", "Free diagnostics for laptops"),
        ("Tiny Treasures Gifts", "Retail", "Free gift wrapping this week"),
    ];

    for (name, category, deal_text) in starter_businesses {
        sqlx::query("INSERT INTO businesses (name, category, deal_text) VALUES (?, ?, ?)")
            .bind(name)
            .bind(category)
            .bind(deal_text)
            .execute(pool)
            .await?;
    }

    info!(
        "Seeded starter directory ({} businesses)",
        starter_businesses.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_seeds_starter_directory() {
        let dir = tempfile::tempdir().unwrap();
        let pool = init_database(&dir.path().join("townsquare.db"))
            .await
            .unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM businesses")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 6);
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("townsquare.db");

        let pool = init_database(&db_path).await.unwrap();
        pool.close().await;

        // Second open must not duplicate the starter set
        let pool = init_database(&db_path).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM businesses")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 6);
    }

    #[tokio::test]
    async fn test_schema_rejects_out_of_range_rating() {
        let dir = tempfile::tempdir().unwrap();
        let pool = init_database(&dir.path().join("townsquare.db"))
            .await
            .unwrap();

        let result = sqlx::query(
            "INSERT INTO reviews (business_id, rating, text, created_at) VALUES (1, 9, 'x', CURRENT_TIMESTAMP)",
        )
        .execute(&pool)
        .await;
        assert!(result.is_err());
    }
}

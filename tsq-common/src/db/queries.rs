//! Directory queries
//!
//! High-level functions over the businesses and reviews tables so the rest
//! of the code never touches SQL. Inputs crossing a validation gate
//! (ratings, review text, names) are expected to be validated already;
//! these functions only enforce referential rules.

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::models::{Business, Category, Review};
use crate::{Error, Result};

fn row_to_business(row: &SqliteRow) -> Result<Business> {
    let category_str: String = row.try_get("category")?;
    let category = Category::parse(&category_str)
        .ok_or_else(|| Error::Internal(format!("Unknown category in database: {}", category_str)))?;

    Ok(Business {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        category,
        average_rating: row.try_get("average_rating")?,
        review_count: row.try_get("review_count")?,
        deal_text: row.try_get("deal_text")?,
        is_favorite: row.try_get::<i64, _>("is_favorite")? != 0,
    })
}

fn row_to_review(row: &SqliteRow) -> Result<Review> {
    Ok(Review {
        id: row.try_get("id")?,
        business_id: row.try_get("business_id")?,
        rating: row.try_get::<i64, _>("rating")? as u8,
        text: row.try_get("text")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Fetch a single business by id
pub async fn get_business(pool: &SqlitePool, business_id: i64) -> Result<Business> {
    let row = sqlx::query("SELECT * FROM businesses WHERE id = ?")
        .bind(business_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("business {}", business_id)))?;

    row_to_business(&row)
}

/// Return businesses matching the provided filters
///
/// With `sort_by_rating_desc` the list orders by rating, then review count,
/// then name; otherwise alphabetically by name.
pub async fn get_businesses(
    pool: &SqlitePool,
    category_filter: Option<Category>,
    favorites_only: bool,
    sort_by_rating_desc: bool,
) -> Result<Vec<Business>> {
    let mut query = String::from("SELECT * FROM businesses");
    let mut clauses: Vec<&str> = Vec::new();

    if category_filter.is_some() {
        clauses.push("category = ?");
    }
    if favorites_only {
        clauses.push("is_favorite = 1");
    }
    if !clauses.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&clauses.join(" AND "));
    }

    if sort_by_rating_desc {
        query.push_str(" ORDER BY average_rating DESC, review_count DESC, name ASC");
    } else {
        query.push_str(" ORDER BY name ASC");
    }

    let mut q = sqlx::query(&query);
    if let Some(category) = category_filter {
        q = q.bind(category.as_str());
    }

    let rows = q.fetch_all(pool).await?;
    rows.iter().map(row_to_business).collect()
}

/// Insert a new business into the directory and return the created record
pub async fn add_business(
    pool: &SqlitePool,
    name: &str,
    category: Category,
    deal_text: &str,
) -> Result<Business> {
    let result = sqlx::query("INSERT INTO businesses (name, category, deal_text) VALUES (?, ?, ?)")
        .bind(name.trim())
        .bind(category.as_str())
        .bind(deal_text.trim())
        .execute(pool)
        .await?;

    get_business(pool, result.last_insert_rowid()).await
}

/// Set or clear the favorite flag for a business
pub async fn toggle_favorite(
    pool: &SqlitePool,
    business_id: i64,
    make_favorite: bool,
) -> Result<()> {
    let result = sqlx::query("UPDATE businesses SET is_favorite = ? WHERE id = ?")
        .bind(if make_favorite { 1_i64 } else { 0 })
        .bind(business_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("business {}", business_id)));
    }
    Ok(())
}

/// Store a new review and update the business's rating aggregate
///
/// The review insert and the aggregate rewrite commit as one transaction;
/// no caller can observe a review without its aggregate or vice versa. The
/// average is recomputed from the full review set on every insert rather
/// than maintained incrementally.
pub async fn add_review(
    pool: &SqlitePool,
    business_id: i64,
    rating: u8,
    text: &str,
) -> Result<Business> {
    let mut tx = pool.begin().await?;

    // Reject unknown businesses before writing anything
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM businesses WHERE id = ?)")
        .bind(business_id)
        .fetch_one(&mut *tx)
        .await?;
    if !exists {
        return Err(Error::NotFound(format!("business {}", business_id)));
    }

    sqlx::query("INSERT INTO reviews (business_id, rating, text, created_at) VALUES (?, ?, ?, ?)")
        .bind(business_id)
        .bind(rating as i64)
        .bind(text)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

    let (avg_rating, review_count): (f64, i64) = sqlx::query_as(
        "SELECT COALESCE(AVG(rating), 0.0), COUNT(*) FROM reviews WHERE business_id = ?",
    )
    .bind(business_id)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE businesses SET average_rating = ?, review_count = ? WHERE id = ?")
        .bind(avg_rating)
        .bind(review_count)
        .bind(business_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    get_business(pool, business_id).await
}

/// Return all reviews for a business, newest first
pub async fn get_reviews(pool: &SqlitePool, business_id: i64) -> Result<Vec<Review>> {
    let rows = sqlx::query("SELECT * FROM reviews WHERE business_id = ? ORDER BY created_at DESC, id DESC")
        .bind(business_id)
        .fetch_all(pool)
        .await?;

    rows.iter().map(row_to_review).collect()
}

/// Remove a business and, via the foreign-key cascade, its reviews
pub async fn delete_business(pool: &SqlitePool, business_id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM businesses WHERE id = ?")
        .bind(business_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("business {}", business_id)));
    }
    Ok(())
}

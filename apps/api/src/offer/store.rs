use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::models::offer::{NewOffer, Offer, OfferRow};

/// Swaps in a new offer as the single current snapshot.
///
/// Delete and insert share one transaction, so a concurrent reader sees
/// either the previous offer or the new one, never an empty table.
pub async fn replace_offer(pool: &SqlitePool, new_offer: NewOffer) -> Result<Offer, sqlx::Error> {
    let NewOffer {
        name,
        value_props,
        ideal_use_cases,
    } = new_offer;

    let row = OfferRow {
        id: Uuid::new_v4(),
        name,
        value_props: Json(value_props),
        ideal_use_cases: Json(ideal_use_cases),
        created_at: Utc::now(),
    };

    let mut tx = pool.begin().await?;

    let removed = sqlx::query("DELETE FROM offers")
        .execute(&mut *tx)
        .await?
        .rows_affected();

    sqlx::query(
        r#"
        INSERT INTO offers (id, name, value_props, ideal_use_cases, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(row.id)
    .bind(&row.name)
    .bind(&row.value_props)
    .bind(&row.ideal_use_cases)
    .bind(row.created_at)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!("Offer '{}' stored as {} (replaced {removed})", row.name, row.id);
    Ok(row.into())
}

/// Returns the current offer, if one has been set.
pub async fn current_offer(pool: &SqlitePool) -> Result<Option<Offer>, sqlx::Error> {
    let row = sqlx::query_as::<_, OfferRow>(
        "SELECT * FROM offers ORDER BY created_at DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;
    Ok(row.map(Offer::from))
}

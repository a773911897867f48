use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Stored row. List columns are JSON text in SQLite.
#[derive(Debug, Clone, FromRow)]
pub struct OfferRow {
    pub id: Uuid,
    pub name: String,
    pub value_props: Json<Vec<String>>,
    pub ideal_use_cases: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

/// The seller's product description used as scoring context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub name: String,
    pub value_props: Vec<String>,
    pub ideal_use_cases: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<OfferRow> for Offer {
    fn from(row: OfferRow) -> Self {
        Offer {
            id: row.id,
            name: row.name,
            value_props: row.value_props.0,
            ideal_use_cases: row.ideal_use_cases.0,
            created_at: row.created_at,
        }
    }
}

/// Body of `POST /offer`. All three fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOffer {
    pub name: String,
    pub value_props: Vec<String>,
    pub ideal_use_cases: Vec<String>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A prospective customer record. Scoring fields stay `None` until `/score` runs.
///
/// Rows also carry an upload `position` column; listing orders by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub linkedin_bio: Option<String>,
    pub score: Option<i64>,
    pub intent: Option<String>,
    pub reasoning: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// One parsed CSV row, before it is assigned an id and position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub linkedin_bio: Option<String>,
}

/// Scoring output written back onto a lead.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadScore {
    pub lead_id: Uuid,
    pub score: i64,
    pub intent: String,
    pub reasoning: String,
}

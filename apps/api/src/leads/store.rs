use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::models::lead::{Lead, LeadScore, NewLead};

/// Replaces the whole lead batch with `new_leads`, in the given order.
///
/// Same snapshot contract as the offer: delete and insert commit together.
pub async fn replace_leads(pool: &SqlitePool, new_leads: &[NewLead]) -> Result<u64, sqlx::Error> {
    let uploaded_at = Utc::now();
    let mut tx = pool.begin().await?;

    let removed = sqlx::query("DELETE FROM leads")
        .execute(&mut *tx)
        .await?
        .rows_affected();

    for (position, lead) in new_leads.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO leads
                (id, position, name, role, company, industry, location, linkedin_bio, uploaded_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(position as i64)
        .bind(&lead.name)
        .bind(&lead.role)
        .bind(&lead.company)
        .bind(&lead.industry)
        .bind(&lead.location)
        .bind(&lead.linkedin_bio)
        .bind(uploaded_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!("Replaced {removed} leads with {} uploaded leads", new_leads.len());
    Ok(new_leads.len() as u64)
}

/// All leads in upload order.
pub async fn list_leads(pool: &SqlitePool) -> Result<Vec<Lead>, sqlx::Error> {
    sqlx::query_as::<_, Lead>("SELECT * FROM leads ORDER BY position ASC")
        .fetch_all(pool)
        .await
}

/// Writes a full scoring pass in one transaction: either every lead is
/// updated or none is.
pub async fn apply_scores(pool: &SqlitePool, scores: &[LeadScore]) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for s in scores {
        sqlx::query("UPDATE leads SET score = ?, intent = ?, reasoning = ? WHERE id = ?")
            .bind(s.score)
            .bind(&s.intent)
            .bind(&s.reasoning)
            .bind(s.lead_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn new_lead(name: &str) -> NewLead {
        NewLead {
            name: name.to_string(),
            role: Some("VP Sales".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_preserves_upload_order() {
        let pool = test_pool().await;
        let names = ["Zed", "Ada", "Mia", "Bob"];
        let batch: Vec<_> = names.iter().map(|n| new_lead(n)).collect();

        assert_eq!(replace_leads(&pool, &batch).await.unwrap(), 4);

        let listed: Vec<String> = list_leads(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(listed, names);
    }

    #[tokio::test]
    async fn test_replace_discards_previous_batch() {
        let pool = test_pool().await;
        replace_leads(&pool, &[new_lead("Old One"), new_lead("Old Two")])
            .await
            .unwrap();
        replace_leads(&pool, &[new_lead("New")]).await.unwrap();

        let leads = list_leads(&pool).await.unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].name, "New");
    }

    #[tokio::test]
    async fn test_uploaded_leads_are_unscored() {
        let pool = test_pool().await;
        replace_leads(&pool, &[new_lead("Ada")]).await.unwrap();

        let lead = list_leads(&pool).await.unwrap().remove(0);
        assert_eq!(lead.score, None);
        assert_eq!(lead.intent, None);
        assert_eq!(lead.reasoning, None);
        assert_eq!(lead.company, None);
    }

    #[tokio::test]
    async fn test_apply_scores_updates_each_lead() {
        let pool = test_pool().await;
        replace_leads(&pool, &[new_lead("Ada"), new_lead("Bob")])
            .await
            .unwrap();
        let leads = list_leads(&pool).await.unwrap();

        let scores: Vec<LeadScore> = leads
            .iter()
            .enumerate()
            .map(|(i, l)| LeadScore {
                lead_id: l.id,
                score: 40 + i as i64,
                intent: "Medium".to_string(),
                reasoning: format!("reason {i}"),
            })
            .collect();
        apply_scores(&pool, &scores).await.unwrap();

        let scored = list_leads(&pool).await.unwrap();
        assert_eq!(scored[0].score, Some(40));
        assert_eq!(scored[1].score, Some(41));
        assert_eq!(scored[1].intent.as_deref(), Some("Medium"));
        assert_eq!(scored[1].reasoning.as_deref(), Some("reason 1"));
    }
}

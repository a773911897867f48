//! One scoring pass over the current lead batch.
//!
//! 1. Load the current offer; none → `AppError::Precondition`.
//! 2. Load leads in upload order; none → zero scored, no AI calls.
//! 3. For each lead: rule score + AI assessment, merged into a `LeadScore`.
//! 4. Commit every `LeadScore` in a single transaction.

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::leads::store::{apply_scores, list_leads};
use crate::models::lead::{Lead, LeadScore};
use crate::models::offer::Offer;
use crate::offer::store::current_offer;
use crate::scoring::intent::{AiAssessment, IntentClassifier, IntentRequest};
use crate::scoring::rules::{rule_score, MAX_RULE_SCORE};

pub const NO_OFFER_MESSAGE: &str = "No offer has been set. Please POST to /offer first.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringSummary {
    pub scored: usize,
    /// Leads whose AI layer fell back to the error sentinel.
    pub ai_failures: usize,
}

pub async fn score_all_leads(
    pool: &SqlitePool,
    classifier: &dyn IntentClassifier,
) -> Result<ScoringSummary, AppError> {
    let offer = current_offer(pool)
        .await?
        .ok_or_else(|| AppError::Precondition(NO_OFFER_MESSAGE.to_string()))?;

    let leads = list_leads(pool).await?;
    if leads.is_empty() {
        info!("Scoring requested with no leads uploaded");
        return Ok(ScoringSummary {
            scored: 0,
            ai_failures: 0,
        });
    }

    info!(
        "Scoring {} leads against offer '{}' (intent backend: {})",
        leads.len(),
        offer.name,
        classifier.backend()
    );

    let mut scores = Vec::with_capacity(leads.len());
    let mut ai_failures = 0;
    for lead in &leads {
        let scored = score_lead(lead, &offer, classifier).await;
        if scored.ai_failed {
            ai_failures += 1;
        }
        scores.push(scored.update);
    }

    apply_scores(pool, &scores).await?;

    info!("Scored {} leads ({ai_failures} without AI intent)", scores.len());

    Ok(ScoringSummary {
        scored: scores.len(),
        ai_failures,
    })
}

/// One lead's result, plus whether its classifier call failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredLead {
    pub update: LeadScore,
    pub ai_failed: bool,
}

/// Combined score for one lead: rule points (0–50) + intent points (0–50).
pub async fn score_lead(
    lead: &Lead,
    offer: &Offer,
    classifier: &dyn IntentClassifier,
) -> ScoredLead {
    let rules = rule_score(lead, offer);
    debug_assert!((0..=MAX_RULE_SCORE).contains(&rules.total()));
    debug!(lead_id = %lead.id, ?rules, "Rule breakdown");

    let ai = AiAssessment::from(classifier.classify(&IntentRequest::new(lead, offer)).await);
    if ai.failed {
        warn!(lead_id = %lead.id, "AI intent unavailable: {}", ai.reasoning);
    }

    ScoredLead {
        update: LeadScore {
            lead_id: lead.id,
            score: rules.total() + ai.points,
            intent: ai.intent,
            reasoning: ai.reasoning,
        },
        ai_failed: ai.failed,
    }
}

//! AI intent layer: a trait seam over the external model.
//!
//! Orchestration only sees `IntentClassifier`: a structured `IntentRequest`
//! goes in, a tagged `IntentOutcome` comes out. `AiAssessment` then applies
//! the points table and the `"Error"` sentinel, so no classifier failure ever
//! reaches the caller as an error.
//!
//! Backends:
//! - `LlmIntentClassifier`: prompt → Claude → two-line reply parser
//! - `UnconfiguredClassifier`: no API key; every lead gets the sentinel

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::{LlmClient, LlmError};
use crate::models::lead::Lead;
use crate::models::offer::Offer;
use crate::scoring::prompts::{INTENT_PROMPT_TEMPLATE, INTENT_SYSTEM};

pub const ERROR_INTENT: &str = "Error";
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "AI scoring is not configured: ANTHROPIC_API_KEY is not set.";

const INTENT_MARKER: &str = "Intent:";
const REASONING_MARKER: &str = "Reasoning:";

// ────────────────────────────────────────────────────────────────────────────
// Request / outcome types
// ────────────────────────────────────────────────────────────────────────────

/// Everything the external model is told about one lead and the offer.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentRequest {
    pub offer_name: String,
    pub value_props: Vec<String>,
    pub ideal_use_cases: Vec<String>,
    pub lead_name: String,
    pub lead_role: Option<String>,
    pub lead_company: Option<String>,
    pub lead_industry: Option<String>,
    pub lead_bio: Option<String>,
}

impl IntentRequest {
    pub fn new(lead: &Lead, offer: &Offer) -> Self {
        Self {
            offer_name: offer.name.clone(),
            value_props: offer.value_props.clone(),
            ideal_use_cases: offer.ideal_use_cases.clone(),
            lead_name: lead.name.clone(),
            lead_role: lead.role.clone(),
            lead_company: lead.company.clone(),
            lead_industry: lead.industry.clone(),
            lead_bio: lead.linkedin_bio.clone(),
        }
    }

    pub fn to_prompt(&self) -> String {
        fn or_na(v: &Option<String>) -> &str {
            v.as_deref().unwrap_or("N/A")
        }

        INTENT_PROMPT_TEMPLATE
            .replace("{offer_name}", &self.offer_name)
            .replace("{value_props}", &self.value_props.join(", "))
            .replace("{ideal_use_cases}", &self.ideal_use_cases.join(", "))
            .replace("{lead_name}", &self.lead_name)
            .replace("{lead_role}", or_na(&self.lead_role))
            .replace("{lead_company}", or_na(&self.lead_company))
            .replace("{lead_industry}", or_na(&self.lead_industry))
            .replace("{lead_bio}", or_na(&self.lead_bio))
    }
}

/// Buying-intent label. Anything other than the three known labels is kept
/// verbatim and earns no points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    High,
    Medium,
    Low,
    Other(String),
}

impl Intent {
    pub fn from_label(label: &str) -> Self {
        match label {
            "High" => Intent::High,
            "Medium" => Intent::Medium,
            "Low" => Intent::Low,
            other => Intent::Other(other.to_string()),
        }
    }

    pub fn points(&self) -> i64 {
        match self {
            Intent::High => 50,
            Intent::Medium => 30,
            Intent::Low => 10,
            Intent::Other(_) => 0,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Intent::High => "High",
            Intent::Medium => "Medium",
            Intent::Low => "Low",
            Intent::Other(label) => label.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    Classified { intent: Intent, reasoning: String },
    Failed { reason: String },
}

/// What gets merged onto the lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiAssessment {
    pub intent: String,
    pub reasoning: String,
    pub points: i64,
    /// Set only for `IntentOutcome::Failed`, never inferred from the label.
    pub failed: bool,
}

impl From<IntentOutcome> for AiAssessment {
    fn from(outcome: IntentOutcome) -> Self {
        match outcome {
            IntentOutcome::Classified { intent, reasoning } => AiAssessment {
                points: intent.points(),
                intent: intent.label().to_string(),
                reasoning,
                failed: false,
            },
            IntentOutcome::Failed { reason } => AiAssessment {
                intent: ERROR_INTENT.to_string(),
                reasoning: reason,
                points: 0,
                failed: true,
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Carried in `AppState` as `Arc<dyn IntentClassifier>`.
///
/// Implementations must not panic or return errors for provider trouble;
/// they report it as `IntentOutcome::Failed`.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, request: &IntentRequest) -> IntentOutcome;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

/// Picks the backend from the configured credential.
pub fn build_classifier(api_key: Option<&str>) -> Result<Arc<dyn IntentClassifier>, LlmError> {
    let classifier: Arc<dyn IntentClassifier> = match api_key {
        Some(key) => Arc::new(LlmIntentClassifier::new(LlmClient::new(key.to_string())?)),
        None => Arc::new(UnconfiguredClassifier),
    };
    Ok(classifier)
}

// ────────────────────────────────────────────────────────────────────────────
// Backends
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmIntentClassifier {
    llm: LlmClient,
}

impl LlmIntentClassifier {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl IntentClassifier for LlmIntentClassifier {
    async fn classify(&self, request: &IntentRequest) -> IntentOutcome {
        let reply = match self.llm.complete(&request.to_prompt(), INTENT_SYSTEM).await {
            Ok(reply) => reply,
            Err(e) => {
                return IntentOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        match parse_intent_reply(&reply) {
            Ok((intent, reasoning)) => IntentOutcome::Classified { intent, reasoning },
            Err(e) => IntentOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

pub struct UnconfiguredClassifier;

#[async_trait]
impl IntentClassifier for UnconfiguredClassifier {
    async fn classify(&self, _request: &IntentRequest) -> IntentOutcome {
        IntentOutcome::Failed {
            reason: MISSING_CREDENTIAL_MESSAGE.to_string(),
        }
    }

    fn backend(&self) -> &'static str {
        "unconfigured"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reply parsing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntentParseError {
    #[error("Model reply has no 'Intent:' line")]
    MissingIntent,

    #[error("Model reply has no 'Reasoning:' line")]
    MissingReasoning,
}

/// Reads the first line containing `Intent:` and the first containing
/// `Reasoning:`. Each value is whatever follows the line's first colon,
/// trimmed.
pub fn parse_intent_reply(reply: &str) -> Result<(Intent, String), IntentParseError> {
    let intent = marker_value(reply, INTENT_MARKER).ok_or(IntentParseError::MissingIntent)?;
    let reasoning =
        marker_value(reply, REASONING_MARKER).ok_or(IntentParseError::MissingReasoning)?;
    Ok((Intent::from_label(intent), reasoning.to_string()))
}

fn marker_value<'a>(reply: &'a str, marker: &str) -> Option<&'a str> {
    reply
        .lines()
        .find(|line| line.contains(marker))
        .and_then(|line| line.split_once(':'))
        .map(|(_, value)| value.trim())
}

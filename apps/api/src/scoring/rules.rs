//! Deterministic rule scorer: role relevance, industry match and data
//! completeness, capped at 50 points in total.

use crate::models::lead::Lead;
use crate::models::offer::Offer;

pub const DECISION_MAKER_KEYWORDS: &[&str] =
    &["head", "vp", "director", "chief", "founder", "ceo", "manager"];
pub const INFLUENCER_KEYWORDS: &[&str] = &["lead", "senior", "principal", "architect"];

pub const DECISION_MAKER_POINTS: i64 = 20;
pub const INFLUENCER_POINTS: i64 = 10;
pub const INDUSTRY_MATCH_POINTS: i64 = 20;
pub const COMPLETENESS_POINTS: i64 = 10;

/// Upper bound of `RuleBreakdown::total`.
pub const MAX_RULE_SCORE: i64 = DECISION_MAKER_POINTS + INDUSTRY_MATCH_POINTS + COMPLETENESS_POINTS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleBreakdown {
    pub role: i64,
    pub industry: i64,
    pub completeness: i64,
}

impl RuleBreakdown {
    pub fn total(&self) -> i64 {
        self.role + self.industry + self.completeness
    }
}

pub fn rule_score(lead: &Lead, offer: &Offer) -> RuleBreakdown {
    RuleBreakdown {
        role: role_points(lead.role.as_deref()),
        industry: industry_points(lead.industry.as_deref(), &offer.ideal_use_cases),
        completeness: completeness_points(lead),
    }
}

/// Decision-maker keywords take precedence over influencer keywords.
fn role_points(role: Option<&str>) -> i64 {
    let Some(role) = role else { return 0 };
    let role = role.to_lowercase();

    if DECISION_MAKER_KEYWORDS.iter().any(|k| role.contains(k)) {
        DECISION_MAKER_POINTS
    } else if INFLUENCER_KEYWORDS.iter().any(|k| role.contains(k)) {
        INFLUENCER_POINTS
    } else {
        0
    }
}

/// Substring match of any ideal use case inside the lead's industry.
fn industry_points(industry: Option<&str>, ideal_use_cases: &[String]) -> i64 {
    let Some(industry) = industry.filter(|i| !i.is_empty()) else {
        return 0;
    };
    let industry = industry.to_lowercase();

    if ideal_use_cases
        .iter()
        .any(|icp| industry.contains(&icp.to_lowercase()))
    {
        INDUSTRY_MATCH_POINTS
    } else {
        0
    }
}

fn completeness_points(lead: &Lead) -> i64 {
    let optional = [
        &lead.role,
        &lead.company,
        &lead.industry,
        &lead.location,
        &lead.linkedin_bio,
    ];
    let complete = !lead.name.trim().is_empty()
        && optional
            .iter()
            .all(|f| f.as_deref().is_some_and(|v| !v.trim().is_empty()));

    if complete {
        COMPLETENESS_POINTS
    } else {
        0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    pub(crate) fn make_lead(role: Option<&str>, industry: Option<&str>) -> Lead {
        Lead {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            role: role.map(String::from),
            company: Some("Acme".to_string()),
            industry: industry.map(String::from),
            location: Some("NY".to_string()),
            linkedin_bio: Some("10 years sales".to_string()),
            score: None,
            intent: None,
            reasoning: None,
            uploaded_at: Utc::now(),
        }
    }

    pub(crate) fn make_offer(ideal_use_cases: &[&str]) -> Offer {
        Offer {
            id: Uuid::new_v4(),
            name: "Acme CRM".to_string(),
            value_props: vec!["save time".to_string()],
            ideal_use_cases: ideal_use_cases.iter().map(|s| s.to_string()).collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_decision_maker_roles_score_20() {
        for role in [
            "VP Sales",
            "Head of Growth",
            "CEO",
            "Co-Founder",
            "chief of staff",
            "Engineering Manager",
        ] {
            assert_eq!(role_points(Some(role)), 20, "role {role}");
        }
    }

    #[test]
    fn test_decision_maker_wins_over_influencer() {
        assert_eq!(role_points(Some("Senior Director")), 20);
        assert_eq!(role_points(Some("Lead Architect Manager")), 20);
    }

    #[test]
    fn test_influencer_only_roles_score_10() {
        for role in ["Senior Engineer", "Tech Lead", "Principal PM", "Solutions Architect"] {
            assert_eq!(role_points(Some(role)), 10, "role {role}");
        }
    }

    #[test]
    fn test_unrelated_or_missing_role_scores_0() {
        assert_eq!(role_points(Some("Intern")), 0);
        assert_eq!(role_points(Some("")), 0);
        assert_eq!(role_points(None), 0);
    }

    #[test]
    fn test_role_keywords_match_as_substrings() {
        // "leader" contains "lead"
        assert_eq!(role_points(Some("Team Leader")), 10);
    }

    #[test]
    fn test_industry_substring_match_case_insensitive() {
        let icps = vec!["SaaS".to_string(), "Fintech".to_string()];
        assert_eq!(industry_points(Some("B2B SAAS"), &icps), 20);
        assert_eq!(industry_points(Some("fintech"), &icps), 20);
        assert_eq!(industry_points(Some("Healthcare"), &icps), 0);
    }

    #[test]
    fn test_industry_match_requires_icp_inside_industry() {
        // The use case must be contained in the industry, not the reverse.
        let icps = vec!["Enterprise SaaS".to_string()];
        assert_eq!(industry_points(Some("SaaS"), &icps), 0);
    }

    #[test]
    fn test_industry_missing_or_no_icps_scores_0() {
        assert_eq!(industry_points(None, &["SaaS".to_string()]), 0);
        assert_eq!(industry_points(Some(""), &["SaaS".to_string()]), 0);
        assert_eq!(industry_points(Some("SaaS"), &[]), 0);
    }

    #[test]
    fn test_completeness_requires_all_six_fields() {
        let lead = make_lead(Some("VP Sales"), Some("Fintech"));
        assert_eq!(completeness_points(&lead), 10);

        let mut missing_bio = lead.clone();
        missing_bio.linkedin_bio = None;
        assert_eq!(completeness_points(&missing_bio), 0);

        let mut blank_location = lead.clone();
        blank_location.location = Some("   ".to_string());
        assert_eq!(completeness_points(&blank_location), 0);

        let mut blank_name = lead;
        blank_name.name = " ".to_string();
        assert_eq!(completeness_points(&blank_name), 0);
    }

    #[test]
    fn test_acme_example_scores_maximum() {
        let lead = make_lead(Some("VP Sales"), Some("Fintech"));
        let offer = make_offer(&["SaaS", "Fintech"]);

        let breakdown = rule_score(&lead, &offer);
        assert_eq!(
            breakdown,
            RuleBreakdown {
                role: 20,
                industry: 20,
                completeness: 10
            }
        );
        assert_eq!(breakdown.total(), MAX_RULE_SCORE);
        assert_eq!(MAX_RULE_SCORE, 50);
    }

    #[test]
    fn test_minimum_score_is_zero() {
        let mut lead = make_lead(Some("Intern"), Some("Agriculture"));
        lead.company = None;
        let offer = make_offer(&["SaaS"]);
        assert_eq!(rule_score(&lead, &offer).total(), 0);
    }
}

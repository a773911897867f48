// Intent classification prompt. The reply format here is the contract
// `intent::parse_intent_reply` depends on.

pub const INTENT_SYSTEM: &str = "\
You are an experienced B2B sales analyst. \
You judge how likely a prospect is to buy a product, using only the facts provided. \
Respond in plain text with exactly the two lines requested, no markdown and no extra commentary.";

pub const INTENT_PROMPT_TEMPLATE: &str = r#"Assess the buying intent of the prospect below for the product being offered.

PRODUCT / OFFER:
- Name: {offer_name}
- Value propositions: {value_props}
- Ideal use cases: {ideal_use_cases}

PROSPECT:
- Name: {lead_name}
- Role: {lead_role}
- Company: {lead_company}
- Industry: {lead_industry}
- LinkedIn bio: {lead_bio}

Classify the prospect's buying intent as High, Medium, or Low.
Respond with exactly two lines in this format:
Intent: <High|Medium|Low>
Reasoning: <one or two sentences explaining the classification>"#;

pub mod handlers;
pub mod intent;
pub mod orchestrator;
pub mod prompts;
pub mod rules;

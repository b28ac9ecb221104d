//! Triage: LLM agents that classify, prioritize and answer new tickets.
//!
//! DESIGN
//! ======
//! Three small agents each send one prompt and map the reply onto a typed
//! value. Classification and priority are independent and run concurrently;
//! the resolution agent runs afterwards because its prompt includes the
//! category. An agent whose call fails logs a warning and yields its
//! fallback, so ticket creation never fails on the model.
//!
//! SYSTEM CONTEXT
//! ==============
//! Called from `routes::tickets::create_ticket` before the insert. The LLM is
//! optional in `AppState`; with none configured every agent falls back.

use std::sync::{Arc, OnceLock};

use tickets::{TicketCategory, TicketPriority, TicketStatus};
use tracing::{debug, info, warn};

use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};

const DEFAULT_TRIAGE_RESOLUTION_MAX_TOKENS: u32 = 1024;
const DEFAULT_TRIAGE_LABEL_MAX_TOKENS: u32 = 16;

/// Marker the resolution agent uses when it proposes a fix directly.
pub const SUGGESTED_SOLUTION_MARKER: &str = "Suggested Solution";

pub const ESCALATION_FALLBACK: &str =
    "Thanks for reaching out. Your ticket has been escalated to our support team and an agent will follow up shortly.";

const SYSTEM_PROMPT: &str = "You are an AI agent in a customer support triage pipeline. Answer exactly as instructed.";

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn triage_resolution_max_tokens() -> u32 {
    static VALUE: OnceLock<u32> = OnceLock::new();
    *VALUE.get_or_init(|| env_parse("TRIAGE_RESOLUTION_MAX_TOKENS", DEFAULT_TRIAGE_RESOLUTION_MAX_TOKENS))
}

fn triage_label_max_tokens() -> u32 {
    static VALUE: OnceLock<u32> = OnceLock::new();
    *VALUE.get_or_init(|| env_parse("TRIAGE_LABEL_MAX_TOKENS", DEFAULT_TRIAGE_LABEL_MAX_TOKENS))
}

// =============================================================================
// OUTPUT MAPPING
// =============================================================================

/// Strip code fences and a stray `json` tag from model output.
#[must_use]
pub fn clean_llm_output(raw: &str) -> String {
    raw.trim().replace('`', "").replace("json", "").trim().to_string()
}

#[must_use]
pub fn category_from_output(output: &str) -> TicketCategory {
    let output = output.to_lowercase();
    if output.contains("billing") {
        TicketCategory::Billing
    } else if output.contains("technical") {
        TicketCategory::Technical
    } else {
        TicketCategory::General
    }
}

#[must_use]
pub fn priority_from_output(output: &str) -> TicketPriority {
    let output = output.to_lowercase();
    if output.contains("high") {
        TicketPriority::High
    } else if output.contains("medium") {
        TicketPriority::Medium
    } else {
        TicketPriority::Low
    }
}

#[must_use]
pub fn status_from_resolution(resolution: &str) -> TicketStatus {
    if resolution.contains(SUGGESTED_SOLUTION_MARKER) {
        TicketStatus::Resolved
    } else {
        TicketStatus::Escalated
    }
}

// =============================================================================
// PROMPTS
// =============================================================================

pub(crate) fn classification_prompt(description: &str) -> String {
    format!(
        "Classify the following support ticket description into one of these categories: \
         billing, technical, or general.\n\n\
         Return only a single word for the category.\n\n\
         Description: \"{description}\"\nCategory:"
    )
}

pub(crate) fn priority_prompt(description: &str) -> String {
    format!(
        "Analyze the sentiment and keywords of the following support ticket description \
         to determine its priority: low, medium, or high.\n\n\
         Return only a single word for the priority.\n\n\
         Description: \"{description}\"\nPriority:"
    )
}

pub(crate) fn resolution_prompt(description: &str, category: &TicketCategory) -> String {
    format!(
        "You are a helpful customer support agent. Based on the ticket description and its classified \
         category, provide a concise and helpful first response.\n\n\
         If a simple solution is possible (like resetting a password), start your reply with \
         \"{SUGGESTED_SOLUTION_MARKER}:\" and describe it.\n\
         Otherwise, inform the user that the ticket has been escalated to the appropriate team.\n\n\
         Category: {category}\nDescription: \"{description}\"\n\nSuggested Response:"
    )
}

// =============================================================================
// AGENTS
// =============================================================================

async fn ask(llm: &dyn LlmChat, max_tokens: u32, prompt: String) -> Result<String, LlmError> {
    let response = llm.chat(max_tokens, SYSTEM_PROMPT, &[Message::user(prompt)]).await?;
    debug!(
        model = %response.model,
        stop_reason = %response.stop_reason,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "triage: llm reply"
    );
    Ok(clean_llm_output(&response.text))
}

pub struct ClassificationAgent {
    llm: Arc<dyn LlmChat>,
}

impl ClassificationAgent {
    #[must_use]
    pub fn new(llm: Arc<dyn LlmChat>) -> Self {
        Self { llm }
    }

    pub async fn predict(&self, description: &str) -> TicketCategory {
        match ask(self.llm.as_ref(), triage_label_max_tokens(), classification_prompt(description)).await {
            Ok(output) => category_from_output(&output),
            Err(e) => {
                warn!(error = %e, retryable = e.retryable(), "triage: classification failed");
                TicketCategory::General
            }
        }
    }
}

pub struct PriorityAgent {
    llm: Arc<dyn LlmChat>,
}

impl PriorityAgent {
    #[must_use]
    pub fn new(llm: Arc<dyn LlmChat>) -> Self {
        Self { llm }
    }

    pub async fn predict(&self, description: &str) -> TicketPriority {
        match ask(self.llm.as_ref(), triage_label_max_tokens(), priority_prompt(description)).await {
            Ok(output) => priority_from_output(&output),
            Err(e) => {
                warn!(error = %e, retryable = e.retryable(), "triage: priority failed");
                TicketPriority::Low
            }
        }
    }
}

pub struct ResolutionAgent {
    llm: Arc<dyn LlmChat>,
}

impl ResolutionAgent {
    #[must_use]
    pub fn new(llm: Arc<dyn LlmChat>) -> Self {
        Self { llm }
    }

    pub async fn predict(&self, description: &str, category: &TicketCategory) -> String {
        let prompt = resolution_prompt(description, category);
        match ask(self.llm.as_ref(), triage_resolution_max_tokens(), prompt).await {
            Ok(output) if !output.is_empty() => output,
            Ok(_) => {
                warn!("triage: resolution was empty");
                ESCALATION_FALLBACK.to_string()
            }
            Err(e) => {
                warn!(error = %e, retryable = e.retryable(), "triage: resolution failed");
                ESCALATION_FALLBACK.to_string()
            }
        }
    }
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Outcome of triaging one ticket description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triage {
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub resolution: String,
    pub status: TicketStatus,
}

impl Triage {
    /// Result used when no LLM is configured.
    #[must_use]
    pub fn fallback() -> Self {
        let resolution = ESCALATION_FALLBACK.to_string();
        let status = status_from_resolution(&resolution);
        Self { category: TicketCategory::General, priority: TicketPriority::Low, resolution, status }
    }
}

/// Run classification, priority and resolution for a ticket description.
pub async fn triage_ticket(llm: Option<&Arc<dyn LlmChat>>, description: &str) -> Triage {
    let Some(llm) = llm else {
        info!("triage: no LLM configured, using fallbacks");
        return Triage::fallback();
    };

    let classifier = ClassificationAgent::new(Arc::clone(llm));
    let prioritizer = PriorityAgent::new(Arc::clone(llm));
    let resolver = ResolutionAgent::new(Arc::clone(llm));

    let (category, priority) = tokio::join!(classifier.predict(description), prioritizer.predict(description));
    let resolution = resolver.predict(description, &category).await;
    let status = status_from_resolution(&resolution);

    info!(%category, %priority, %status, resolution_len = resolution.len(), "triage: complete");
    Triage { category, priority, resolution, status }
}

#[cfg(test)]
#[path = "triage_test.rs"]
mod tests;

//! Single-field insight prompts.
//!
//! Pricing, demand, inventory and sentiment helpers are library utilities:
//! they are not wired to any command and never persist their answers.

use dineai_types::error::PromptError;
use dineai_types::form::FormInput;
use dineai_types::generation::CompletionText;

use crate::llm::{CompletionClient, TextGenerator};
use crate::prompt::PromptBuilder;
use crate::prompt::library::ids;

/// Suggest a pricing strategy for a menu item.
pub async fn pricing_strategy<T: TextGenerator>(
    prompts: &PromptBuilder,
    completion: &CompletionClient<T>,
    item: &str,
) -> Result<CompletionText, PromptError> {
    ask(prompts, completion, ids::PRICING_STRATEGY, "item", item).await
}

/// Forecast demand for a period (e.g., "next weekend").
pub async fn demand_forecast<T: TextGenerator>(
    prompts: &PromptBuilder,
    completion: &CompletionClient<T>,
    period: &str,
) -> Result<CompletionText, PromptError> {
    ask(prompts, completion, ids::DEMAND_FORECAST, "period", period).await
}

/// Review a free-form inventory listing.
pub async fn inventory_tracking<T: TextGenerator>(
    prompts: &PromptBuilder,
    completion: &CompletionClient<T>,
    inventory: &str,
) -> Result<CompletionText, PromptError> {
    ask(prompts, completion, ids::INVENTORY_TRACKING, "inventory", inventory).await
}

/// Analyze sentiment and food preferences in customer feedback.
pub async fn sentiment_analysis<T: TextGenerator>(
    prompts: &PromptBuilder,
    completion: &CompletionClient<T>,
    feedback: &str,
) -> Result<CompletionText, PromptError> {
    ask(prompts, completion, ids::SENTIMENT_ANALYSIS, "feedback", feedback).await
}

async fn ask<T: TextGenerator>(
    prompts: &PromptBuilder,
    completion: &CompletionClient<T>,
    template_id: &str,
    field: &str,
    value: &str,
) -> Result<CompletionText, PromptError> {
    let values = FormInput::new().with(field, value);
    let prompt = prompts.build(template_id, &values)?;
    Ok(completion.complete(&prompt).await)
}

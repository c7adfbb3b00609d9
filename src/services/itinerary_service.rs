use serde_json::{json, Value};

use crate::config::CompletionConfig;
use crate::error::ProviderError;
use crate::models::plan::Plan;
use crate::services::http::{build_client, endpoint, read_json, require_key};
use crate::services::prompt::make_itinerary_prompt;

/// Sends itinerary prompts to an OpenAI-compatible chat completion endpoint.
#[derive(Clone)]
pub struct ItineraryService {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
}

impl ItineraryService {
    pub fn new(config: &CompletionConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            http_client: build_client(config.provider.timeout)?,
            base_url: config.provider.base_url.clone(),
            api_key: config.provider.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    /// Generates the itinerary text for a plan. Additional ideas are not
    /// collected from the request yet, so the prompt carries none.
    pub async fn create_itinerary(&self, plan: &Plan) -> Result<String, ProviderError> {
        self.create_itinerary_with_ideas(plan, &[]).await
    }

    pub async fn create_itinerary_with_ideas(
        &self,
        plan: &Plan,
        ideas: &[String],
    ) -> Result<String, ProviderError> {
        let prompt = make_itinerary_prompt(
            &plan.date_range(),
            &plan.location,
            plan.num_people,
            &plan.mood,
            ideas,
        );
        self.complete(&prompt).await
    }

    /// Single-turn completion. The returned text is passed through untouched.
    pub async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let key = require_key(&self.api_key, "OPENAI_KEY")?;
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": self.max_tokens,
        });

        let response = self
            .http_client
            .post(endpoint(&self.base_url, &["chat", "completions"])?)
            .bearer_auth(key)
            .json(&body)
            .send()
            .await?;
        let completion = read_json(response).await?;

        completion_text(&completion)
            .ok_or_else(|| ProviderError::Decode("completion has no message content".to_string()))
    }
}

fn completion_text(completion: &Value) -> Option<String> {
    completion
        .get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_choice_content() {
        let completion = json!({
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "### Day 1" } },
                { "index": 1, "message": { "role": "assistant", "content": "ignored" } }
            ]
        });
        assert_eq!(completion_text(&completion).as_deref(), Some("### Day 1"));
    }

    #[test]
    fn missing_content_is_none() {
        assert!(completion_text(&json!({ "choices": [] })).is_none());
        assert!(completion_text(&json!({ "choices": [{ "message": { "content": null } }] })).is_none());
    }
}

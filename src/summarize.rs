use async_trait::async_trait;
use log::debug;

use crate::CompletionService;
use crate::config::Settings;
use crate::error::Error;

const PROMPT_TEMPLATE: &str = "You are a YouTube video summarizer. You will be taking the transcript text \
and summarizing the entire video, providing the important points with proper sub-headings in a concise \
manner (within {word_limit} words). Please provide the summary of the text given here: ";

/// Summary Generator backed by the Gemini generateContent endpoint
pub struct GeminiGenerator<'a> {
    client: &'a reqwest::Client,
    settings: &'a Settings,
}

impl<'a> GeminiGenerator<'a> {
    pub fn new(client: &'a reqwest::Client, settings: &'a Settings) -> Self {
        GeminiGenerator { client, settings }
    }

    async fn request_summary(&self, api_key: &str, prompt: &str) -> eyre::Result<String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.settings.model
        );

        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            eyre::bail!("Gemini API returned {status}: {body}");
        }

        let json: serde_json::Value = resp.json().await?;
        extract_candidate_text(&json)
    }
}

#[async_trait]
impl CompletionService for GeminiGenerator<'_> {
    async fn generate(&self, transcript_text: &str) -> Result<String, Error> {
        // Credential check comes first; no network call without it
        let api_key = std::env::var(&self.settings.api_key_env)
            .map_err(|_| Error::MissingApiKey(self.settings.api_key_env.clone()))?;

        debug!("Summarizing via Gemini API with model {}", self.settings.model);

        let prompt = format!(
            "{}{transcript_text}",
            PROMPT_TEMPLATE.replace("{word_limit}", &self.settings.word_limit.to_string())
        );

        self.request_summary(&api_key, &prompt)
            .await
            .map_err(|e| Error::GenerationFailed(e.to_string()))
    }
}

fn extract_candidate_text(json: &serde_json::Value) -> eyre::Result<String> {
    if let Some(parts) = json
        .pointer("/candidates/0/content/parts")
        .and_then(|p| p.as_array())
    {
        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text")?.as_str().map(|s| s.to_string()))
            .collect::<Vec<_>>()
            .join("");
        if !text.is_empty() {
            return Ok(text);
        }
    }
    eyre::bail!("unexpected Gemini API response format");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_candidate_text() {
        let json = serde_json::json!({
            "candidates": [
                {
                    "content": {
                        "parts": [
                            { "text": "Here is the summary." }
                        ],
                        "role": "model"
                    }
                }
            ]
        });
        assert_eq!(extract_candidate_text(&json).unwrap(), "Here is the summary.");
    }

    #[test]
    fn test_extract_candidate_text_multiple_parts() {
        let json = serde_json::json!({
            "candidates": [
                {
                    "content": {
                        "parts": [
                            { "text": "Part one. " },
                            { "text": "Part two." }
                        ]
                    }
                }
            ]
        });
        assert_eq!(extract_candidate_text(&json).unwrap(), "Part one. Part two.");
    }

    #[test]
    fn test_extract_candidate_text_no_candidates() {
        let json = serde_json::json!({"candidates": []});
        assert!(extract_candidate_text(&json).is_err());
    }

    #[test]
    fn test_extract_candidate_text_empty_parts() {
        let json = serde_json::json!({
            "candidates": [{"content": {"parts": []}}]
        });
        assert!(extract_candidate_text(&json).is_err());
    }

    #[tokio::test]
    async fn test_generate_missing_api_key() {
        let settings = Settings {
            model: "gemini-2.5-flash".to_string(),
            api_key_env: "YTSUM_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            word_limit: 500,
            preselected_lang: None,
        };
        let client = reqwest::Client::new();
        let generator = GeminiGenerator::new(&client, &settings);
        match generator.generate("some transcript").await {
            Err(Error::MissingApiKey(var)) => assert_eq!(var, "YTSUM_TEST_KEY_THAT_IS_NEVER_SET"),
            other => panic!("expected MissingApiKey, got {other:?}"),
        }
    }
}

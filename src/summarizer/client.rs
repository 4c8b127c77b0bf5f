use crate::embedder::HealthResponse;
use crate::summarizer::prompt::{ConclusionPrompt, PromptLanguage, extract_conclusion};
use crate::summarizer::types::{GenerateRequest, GenerateResponse, GenerationParams};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Generator returned an empty conclusion")]
    EmptyCompletion,
}

pub struct DocumenterClient {
    http: Client,
    endpoint: String,
    params: GenerationParams,
    language: PromptLanguage,
}

impl DocumenterClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SummarizerError> {
        Self::with_timeout(endpoint, Duration::from_secs(600)) // 10 min for 900 new tokens
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SummarizerError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            params: GenerationParams::default(),
            language: PromptLanguage::default(),
        })
    }

    pub fn params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn language(mut self, language: PromptLanguage) -> Self {
        self.language = language;
        self
    }

    /// Check if the generation server is healthy
    pub async fn health_check(&self) -> Result<HealthResponse, SummarizerError> {
        let response = self
            .http
            .get(format!("{}/health", self.endpoint))
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Raw completion for a prompt
    pub async fn generate(&self, prompt: String) -> Result<String, SummarizerError> {
        let req = GenerateRequest {
            prompt,
            params: self.params.clone(),
        };

        let response = self
            .http
            .post(format!("{}/generate", self.endpoint))
            .json(&req)
            .send()
            .await?;

        let res: GenerateResponse = check_status(response).await?.json().await?;
        Ok(res.text)
    }

    /// Ask the model for a consolidated conclusion about two excerpt sets
    pub async fn generate_conclusion(
        &self,
        excerpts_a: &[String],
        excerpts_b: &[String],
    ) -> Result<String, SummarizerError> {
        let prompt = ConclusionPrompt::new(excerpts_a, excerpts_b)
            .language(self.language)
            .build();
        tracing::debug!(prompt_chars = prompt.chars().count(), "sending prompt");

        let completion = self.generate(prompt).await?;
        let conclusion = extract_conclusion(&completion, self.language);
        if conclusion.is_empty() {
            return Err(SummarizerError::EmptyCompletion);
        }

        Ok(conclusion)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SummarizerError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(SummarizerError::ServerError {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

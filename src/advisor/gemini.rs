//! Gemini `generateContent` client
//!
//! Blocking HTTP client for the generative language REST API.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerationRequest, TextGenerator};
use crate::config::AdvisorSettings;
use crate::error::{EduEasyError, EduEasyResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, empty if there is none
    pub(crate) fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

pub struct GeminiClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(settings: &AdvisorSettings, api_key: String) -> EduEasyResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| EduEasyError::Advisor(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key,
        })
    }

    /// Create a client if the configured key variable is set
    pub fn from_settings(settings: &AdvisorSettings) -> EduEasyResult<Option<Self>> {
        match settings.api_key() {
            Some(key) => Self::new(settings, key).map(Some),
            None => Ok(None),
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, request: &GenerationRequest) -> EduEasyResult<String> {
        let body = GenerateContentRequest {
            system_instruction: request.system_instruction.as_deref().map(|text| Content {
                role: None,
                parts: vec![Part { text }],
            }),
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
        };

        let url = self.url();
        debug!(url = %url, model = %self.model, "sending generateContent request");

        let response: GenerateContentResponse = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| EduEasyError::Advisor(format!("Request to {} failed: {}", url, e)))?
            .json()
            .map_err(|e| EduEasyError::Advisor(format!("Invalid response body: {}", e)))?;

        Ok(response.text())
    }
}

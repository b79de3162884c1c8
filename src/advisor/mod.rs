//! AI advisor and support chat
//!
//! Text generation sits behind [`TextGenerator`] so the advisor can run
//! against the Gemini API or a stub. The [`Advisor`] never fails: a missing
//! key, an empty answer and a transport error each map to a fixed message.

pub mod gemini;
pub mod prompts;

pub use gemini::GeminiClient;

use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::EduEasyResult;
use crate::models::{ChatMessage, Language, LoanRecord};

pub const MISSING_KEY_ANALYSIS: &str =
    "API Key is missing. Please configure your environment variables.";
pub const EMPTY_ANALYSIS: &str = "No insights generated.";
pub const FAILED_ANALYSIS: &str = "Failed to generate financial insights. Please try again later.";

pub const MISSING_KEY_SUPPORT: &str =
    "I'm sorry, I cannot connect to the server right now (API Key missing).";
pub const EMPTY_SUPPORT: &str = "I didn't catch that. Could you rephrase?";
pub const FAILED_SUPPORT: &str = "I'm having trouble thinking right now. Please try again.";

pub const CHAT_GREETING: &str = "Hello! I am your AI assistant. How can I help you today?";

/// A single generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: Option<String>,
}

/// Anything that turns a prompt into text
pub trait TextGenerator {
    fn generate(&self, request: &GenerationRequest) -> EduEasyResult<String>;
}

/// Portfolio analysis and support replies in the user's language
pub struct Advisor {
    generator: Option<Box<dyn TextGenerator>>,
    language: Language,
}

impl Advisor {
    /// `None` means no API key is configured
    pub fn new(generator: Option<Box<dyn TextGenerator>>, language: Language) -> Self {
        Self {
            generator,
            language,
        }
    }

    /// Build an advisor backed by Gemini, or keyless if `API_KEY` is unset
    pub fn from_settings(settings: &Settings) -> EduEasyResult<Self> {
        let generator = GeminiClient::from_settings(&settings.advisor)?
            .map(|client| Box::new(client) as Box<dyn TextGenerator>);
        Ok(Self::new(generator, settings.language))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn has_key(&self) -> bool {
        self.generator.is_some()
    }

    pub fn analyze_portfolio(&self, loans: &[LoanRecord]) -> String {
        let request = GenerationRequest {
            prompt: prompts::portfolio_prompt(loans, self.language),
            system_instruction: Some(prompts::advisor_system_instruction(self.language)),
        };
        self.respond(
            &request,
            MISSING_KEY_ANALYSIS,
            EMPTY_ANALYSIS,
            FAILED_ANALYSIS,
            "Error generating insights",
        )
    }

    pub fn support_reply(&self, message: &str, context: Option<&str>) -> String {
        let request = GenerationRequest {
            prompt: prompts::support_prompt(message, context),
            system_instruction: Some(prompts::support_system_instruction(self.language)),
        };
        self.respond(
            &request,
            MISSING_KEY_SUPPORT,
            EMPTY_SUPPORT,
            FAILED_SUPPORT,
            "Error in support chat",
        )
    }

    fn respond(
        &self,
        request: &GenerationRequest,
        missing_key: &str,
        empty: &str,
        failed: &str,
        context: &str,
    ) -> String {
        let Some(generator) = &self.generator else {
            return missing_key.to_string();
        };

        debug!(language = %self.language, "requesting generated text");
        match generator.generate(request) {
            Ok(text) if text.is_empty() => empty.to_string(),
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "{}", context);
                failed.to_string()
            }
        }
    }
}

/// Support chat conversation, kept for one session
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::model(CHAT_GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send a message and record the reply
    ///
    /// Blank input is ignored and returns `None`.
    pub fn send(
        &mut self,
        advisor: &Advisor,
        text: &str,
        loans: &[LoanRecord],
    ) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(text));
        let context = prompts::financial_context(loans);
        let reply = advisor.support_reply(text, Some(&context));
        self.messages.push(ChatMessage::model(reply));
        self.messages.last()
    }
}

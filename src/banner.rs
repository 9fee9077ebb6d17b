//! AI assistant banner.
//!
//! The banner offers a "Show prompt" action that asks the host for a
//! generation prompt and inserts the generated content. Whatever goes wrong
//! on that path stays inside the banner: failures are logged and dropped,
//! never shown to the user.

use serde::Serialize;
use thiserror::Error;

pub const HEADLINE: &str = "Generative Rich Text Editor";
pub const INTRO_TEXT: &str =
    "Tell the AI Assistant what content to generate. Powered by ChatGPT API.";
pub const LEARN_MORE_URL: &str = "http://amplience.com/docs/ai-services";
pub const CREDITS_TEXT: &str = "You're out of Amplience Credits. You can still use the editor \
                                to compose your own text.";
pub const CREDITS_URL: &str = "https://amplience.com/developers/docs/ai-services/credits";

/// Kind of prompt requested from the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptVariant {
    Generate,
}

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("prompt dismissed")]
    Dismissed,
    #[error("out of AI credits")]
    OutOfCredits,
    #[error("assistant request failed: {0}")]
    Request(String),
}

/// Host-side collaborator that talks to the content-generation service
pub trait AiAssistant {
    /// Ask the user for a prompt
    fn get_ai_prompt(&mut self, variant: PromptVariant) -> Result<String, AssistError>;

    /// Generate content from `prompt` and insert it into the document
    fn insert_ai_content(&mut self, prompt: &str) -> Result<(), AssistError>;
}

/// Headline and the text shown under it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerMessage {
    pub headline: &'static str,
    pub text: &'static str,
    pub link_label: &'static str,
    pub link_url: &'static str,
    pub is_error: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Content was generated and inserted
    Inserted,
    /// The prompt action is unavailable right now
    Unavailable,
    /// Something failed and was dropped
    Swallowed,
}

#[derive(Clone, Debug, Default)]
pub struct AiBanner {
    credits_exhausted: bool,
    loading: bool,
}

impl AiBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_credits_exhausted(&mut self, exhausted: bool) {
        self.credits_exhausted = exhausted;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn message(&self) -> BannerMessage {
        if self.credits_exhausted {
            BannerMessage {
                headline: HEADLINE,
                text: CREDITS_TEXT,
                link_label: "Get more credits",
                link_url: CREDITS_URL,
                is_error: true,
            }
        } else {
            BannerMessage {
                headline: HEADLINE,
                text: INTRO_TEXT,
                link_label: "Learn more",
                link_url: LEARN_MORE_URL,
                is_error: false,
            }
        }
    }

    /// The prompt action is hidden while loading and disabled without credits
    pub fn prompt_available(&self) -> bool {
        !self.loading && !self.credits_exhausted
    }

    pub fn show_prompt(&mut self, assistant: &mut dyn AiAssistant) -> PromptOutcome {
        if !self.prompt_available() {
            return PromptOutcome::Unavailable;
        }
        let result = assistant
            .get_ai_prompt(PromptVariant::Generate)
            .and_then(|prompt| assistant.insert_ai_content(&prompt));
        match result {
            Ok(()) => PromptOutcome::Inserted,
            Err(err) => {
                tracing::debug!(%err, "AI prompt failed");
                PromptOutcome::Swallowed
            }
        }
    }
}

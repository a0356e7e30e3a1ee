//! Ask Advisor use case.
//!
//! Answers the latest user turn of a conversation. The client comes from
//! the [`ResilientClientFactory`], so credentials and clients are shared
//! with every other turn of the process.
//!
//! A client whose credentials expire server-side is only detected by a
//! failed call. When that happens the client and credentials entries are
//! dropped and the turn is retried once with fresh ones.

use crate::ports::chat_model::{ChatModel, GatewayError};
use crate::ports::client_builder::ClientBuilder;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::use_cases::client_factory::{ClientFactoryError, ResilientClientFactory};
use advisor_domain::{AnswerStyle, ClientSpec, Conversation, SystemPromptTemplate, strip_final_answer};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Longest question prefix written to the log, in bytes.
const QUESTION_PREVIEW_BYTES: usize = 100;

/// Question text cut to at most [`QUESTION_PREVIEW_BYTES`], ending on a
/// char boundary.
fn question_preview(content: &str) -> &str {
    if content.len() <= QUESTION_PREVIEW_BYTES {
        return content;
    }
    let end = content
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= QUESTION_PREVIEW_BYTES)
        .last()
        .unwrap_or(0);
    &content[..end]
}

/// Errors that can occur while answering a turn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AskAdvisorError {
    #[error("Conversation has no user message to answer")]
    NoUserMessage,

    #[error(transparent)]
    Client(#[from] ClientFactoryError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("No response from model")]
    EmptyResponse,
}

/// Input for the [`AskAdvisorUseCase`].
#[derive(Debug, Clone)]
pub struct AskAdvisorInput {
    /// Full history; the last user message is the question being answered.
    pub conversation: Conversation,
    /// Model and temperature selected in the chat surface.
    pub spec: ClientSpec,
    pub style: AnswerStyle,
}

impl AskAdvisorInput {
    pub fn new(conversation: Conversation, spec: ClientSpec, style: AnswerStyle) -> Self {
        Self {
            conversation,
            spec,
            style,
        }
    }
}

/// Result of a successful turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskAdvisorOutput {
    /// Answer text with any reasoning before `Final Answer:` removed.
    pub answer: String,
    /// Wall time spent on the turn, including any refresh.
    pub elapsed: Duration,
    /// Whether the turn had to refresh expired credentials.
    pub refreshed: bool,
}

/// Use case for answering one chat turn.
///
/// 1. Render the system prompt for the selected answer style
/// 2. Get a client for the selected spec through the factory
/// 3. Send the conversation and post-process the reply
pub struct AskAdvisorUseCase<B: ClientBuilder>
where
    B::Client: ChatModel,
{
    factory: Arc<ResilientClientFactory<B>>,
    system_prompt: SystemPromptTemplate,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<B: ClientBuilder> Clone for AskAdvisorUseCase<B>
where
    B::Client: ChatModel,
{
    fn clone(&self) -> Self {
        Self {
            factory: self.factory.clone(),
            system_prompt: self.system_prompt.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl<B: ClientBuilder> AskAdvisorUseCase<B>
where
    B::Client: ChatModel,
{
    pub fn new(factory: Arc<ResilientClientFactory<B>>, system_prompt: SystemPromptTemplate) -> Self {
        Self {
            factory,
            system_prompt,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn factory(&self) -> &Arc<ResilientClientFactory<B>> {
        &self.factory
    }

    /// Answer the last user message of `input.conversation`.
    pub async fn execute(&self, input: &AskAdvisorInput) -> Result<AskAdvisorOutput, AskAdvisorError> {
        let question = input
            .conversation
            .last_user_message()
            .ok_or(AskAdvisorError::NoUserMessage)?;

        info!(
            spec = %input.spec,
            style = %input.style,
            "Answering: {}",
            question_preview(&question.content)
        );
        self.conversation_logger.log(ConversationEvent::new(
            "user_message",
            json!({
                "model": input.spec.model.as_str(),
                "temperature": input.spec.temperature.value(),
                "style": input.style.as_str(),
                "content": question.content,
            }),
        ));

        let started = Instant::now();
        let result = self.answer(input).await;
        let elapsed = started.elapsed();

        match result {
            Ok((answer, refreshed)) => {
                self.conversation_logger.log(ConversationEvent::new(
                    "assistant_message",
                    json!({
                        "model": input.spec.model.as_str(),
                        "content": answer,
                        "elapsed_ms": elapsed.as_millis() as u64,
                        "refreshed": refreshed,
                    }),
                ));
                Ok(AskAdvisorOutput {
                    answer,
                    elapsed,
                    refreshed,
                })
            }
            Err(e) => {
                self.conversation_logger.log(ConversationEvent::new(
                    "turn_failed",
                    json!({
                        "model": input.spec.model.as_str(),
                        "error": e.to_string(),
                    }),
                ));
                Err(e)
            }
        }
    }

    async fn answer(&self, input: &AskAdvisorInput) -> Result<(String, bool), AskAdvisorError> {
        let system_prompt = self
            .system_prompt
            .render(input.style, &chrono::Local::now());

        let (raw, refreshed) = match self.converse(input, &system_prompt).await {
            Ok(raw) => (raw, false),
            Err(AskAdvisorError::Gateway(GatewayError::ExpiredToken(reason))) => {
                warn!(
                    spec = %input.spec,
                    reason = %reason,
                    "Client credentials expired mid-session, refreshing once"
                );
                self.factory.invalidate_client(&input.spec);
                self.factory.invalidate_credentials();
                self.conversation_logger.log(ConversationEvent::new(
                    "credentials_refreshed",
                    json!({ "model": input.spec.model.as_str(), "reason": reason }),
                ));
                (self.converse(input, &system_prompt).await?, true)
            }
            Err(e) => return Err(e),
        };

        let answer = strip_final_answer(&raw).trim();
        if answer.is_empty() {
            return Err(AskAdvisorError::EmptyResponse);
        }
        Ok((answer.to_string(), refreshed))
    }

    async fn converse(
        &self,
        input: &AskAdvisorInput,
        system_prompt: &str,
    ) -> Result<String, AskAdvisorError> {
        let client = self.factory.get_client_for(&input.spec).await?;
        debug!(
            spec = %client.spec(),
            turns = input.conversation.len(),
            "Sending conversation"
        );
        Ok(client.converse(system_prompt, &input.conversation).await?)
    }
}

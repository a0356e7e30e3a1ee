//! Type conversions between AWS Bedrock SDK and domain types
//!
//! Converts a domain [`Conversation`] to Converse API messages, and Converse
//! responses and errors back to text and [`GatewayError`].

use crate::providers::error::{EXPIRED_TOKEN_CODE, describe_sdk_error, service_error_code};
use advisor_application::ports::chat_model::GatewayError;
use advisor_domain::{Conversation, Role};
use aws_sdk_bedrockruntime::error::SdkError;
use aws_sdk_bedrockruntime::operation::converse::ConverseError;
use aws_sdk_bedrockruntime::types as bedrock;

// ─── Domain → Bedrock ────────────────────────────────────────────

/// Split a conversation into Converse system blocks and messages.
///
/// The Converse API requires the message list to start with a user turn
/// and to alternate roles, so leading assistant turns (greetings) are
/// dropped and consecutive turns of the same role are merged into one
/// message with several content blocks. System turns are appended to the
/// system prompt.
pub fn to_converse_request(
    system_prompt: &str,
    conversation: &Conversation,
) -> Result<(Vec<bedrock::SystemContentBlock>, Vec<bedrock::Message>), GatewayError> {
    let mut system = Vec::new();
    if !system_prompt.trim().is_empty() {
        system.push(bedrock::SystemContentBlock::Text(system_prompt.to_string()));
    }

    let mut turns: Vec<(bedrock::ConversationRole, Vec<bedrock::ContentBlock>)> = Vec::new();
    for message in conversation.messages() {
        let role = match message.role {
            Role::System => {
                system.push(bedrock::SystemContentBlock::Text(message.content.clone()));
                continue;
            }
            Role::User => bedrock::ConversationRole::User,
            Role::Assistant if turns.is_empty() => continue,
            Role::Assistant => bedrock::ConversationRole::Assistant,
        };

        let block = bedrock::ContentBlock::Text(message.content.clone());
        match turns.last_mut() {
            Some((last_role, blocks)) if *last_role == role => blocks.push(block),
            _ => turns.push((role, vec![block])),
        }
    }

    let messages = turns
        .into_iter()
        .map(|(role, content)| {
            bedrock::Message::builder()
                .role(role)
                .set_content(Some(content))
                .build()
                .map_err(|e| GatewayError::RequestFailed(format!("Failed to build message: {}", e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((system, messages))
}

// ─── Bedrock → Domain ────────────────────────────────────────────

/// Concatenate the text blocks of a Converse output.
///
/// Returns `None` for non-message outputs. Non-text blocks are skipped.
pub fn output_text(output: &bedrock::ConverseOutput) -> Option<String> {
    match output {
        bedrock::ConverseOutput::Message(message) => Some(
            message
                .content()
                .iter()
                .filter_map(|block| match block {
                    bedrock::ContentBlock::Text(text) => Some(text.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(""),
        ),
        _ => None,
    }
}

/// Convert a Bedrock SDK error to a GatewayError.
///
/// `ExpiredTokenException` is not a modeled Converse error, so it is
/// recognised by its error code before the modeled variants.
pub fn convert_converse_error<R>(err: &SdkError<ConverseError, R>) -> GatewayError
where
    R: std::fmt::Debug,
{
    if service_error_code(err) == Some(EXPIRED_TOKEN_CODE) {
        return GatewayError::ExpiredToken(describe_sdk_error(err));
    }

    match err {
        SdkError::ServiceError(service_err) => match service_err.err() {
            ConverseError::ThrottlingException(e) => {
                GatewayError::Throttled(format!("Bedrock throttled: {}", e))
            }
            ConverseError::ModelNotReadyException(e) => {
                GatewayError::ModelNotAvailable(format!("Bedrock model not ready: {}", e))
            }
            ConverseError::ResourceNotFoundException(e) => {
                GatewayError::ModelNotAvailable(format!("Bedrock model not found: {}", e))
            }
            ConverseError::ValidationException(e) => {
                GatewayError::RequestFailed(format!("Bedrock validation error: {}", e))
            }
            ConverseError::ModelTimeoutException(_) => GatewayError::Timeout,
            _ => GatewayError::RequestFailed(format!(
                "Bedrock error: {}",
                describe_sdk_error(err)
            )),
        },
        SdkError::TimeoutError(_) => GatewayError::Timeout,
        other => GatewayError::ConnectionError(format!(
            "Bedrock SDK error: {}",
            describe_sdk_error(other)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::Message;

    fn roles(messages: &[bedrock::Message]) -> Vec<bedrock::ConversationRole> {
        messages.iter().map(|m| m.role().clone()).collect()
    }

    #[test]
    fn test_request_drops_leading_assistant_greeting() {
        let conversation: Conversation = vec![
            Message::assistant("How can I help you?"),
            Message::user("What is COSC2626?"),
        ]
        .into();

        let (system, messages) = to_converse_request("You advise students.", &conversation).unwrap();

        assert_eq!(system.len(), 1);
        assert_eq!(roles(&messages), vec![bedrock::ConversationRole::User]);
    }

    #[test]
    fn test_request_merges_consecutive_roles() {
        let conversation: Conversation = vec![
            Message::user("First question"),
            Message::user("Actually, second question"),
            Message::assistant("Answer"),
            Message::user("Follow-up"),
        ]
        .into();

        let (_, messages) = to_converse_request("", &conversation).unwrap();

        assert_eq!(
            roles(&messages),
            vec![
                bedrock::ConversationRole::User,
                bedrock::ConversationRole::Assistant,
                bedrock::ConversationRole::User,
            ]
        );
        assert_eq!(messages[0].content().len(), 2);
    }

    #[test]
    fn test_request_folds_system_turns() {
        let conversation: Conversation = vec![
            Message::system("Only answer about RMIT courses."),
            Message::user("Hi"),
        ]
        .into();

        let (system, messages) = to_converse_request("", &conversation).unwrap();

        assert_eq!(
            system,
            vec![bedrock::SystemContentBlock::Text(
                "Only answer about RMIT courses.".to_string()
            )]
        );
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_output_text_joins_text_blocks() {
        let message = bedrock::Message::builder()
            .role(bedrock::ConversationRole::Assistant)
            .content(bedrock::ContentBlock::Text("Final Answer: ".to_string()))
            .content(bedrock::ContentBlock::Text("Semester 1.".to_string()))
            .build()
            .unwrap();

        assert_eq!(
            output_text(&bedrock::ConverseOutput::Message(message)),
            Some("Final Answer: Semester 1.".to_string())
        );
    }
}

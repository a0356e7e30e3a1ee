//! Bedrock chat client
//!
//! Wraps the AWS Bedrock Converse API to implement the [`ChatModel`] port.
//! The Converse API is stateless, so the whole conversation is sent on
//! every call.

use super::types;
use advisor_application::ports::chat_model::{ChatModel, GatewayError};
use advisor_domain::{ClientSpec, Conversation};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::types as bedrock;
use std::fmt;
use tracing::debug;

/// Generation parameters shared by every client.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InferenceSettings {
    pub top_p: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// A Bedrock runtime client bound to one model, temperature and credential set.
pub struct BedrockChatClient {
    client: BedrockClient,
    spec: ClientSpec,
    inference: InferenceSettings,
}

impl fmt::Debug for BedrockChatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BedrockChatClient")
            .field("spec", &self.spec)
            .field("inference", &self.inference)
            .finish_non_exhaustive()
    }
}

impl BedrockChatClient {
    pub fn new(client: BedrockClient, spec: ClientSpec, inference: InferenceSettings) -> Self {
        Self {
            client,
            spec,
            inference,
        }
    }

    fn inference_config(&self) -> bedrock::InferenceConfiguration {
        bedrock::InferenceConfiguration::builder()
            .temperature(self.spec.temperature.value())
            .set_top_p(self.inference.top_p)
            .set_max_tokens(
                self.inference
                    .max_tokens
                    .map(|n| i32::try_from(n).unwrap_or(i32::MAX)),
            )
            .build()
    }
}

#[async_trait]
impl ChatModel for BedrockChatClient {
    fn spec(&self) -> &ClientSpec {
        &self.spec
    }

    async fn converse(
        &self,
        system_prompt: &str,
        conversation: &Conversation,
    ) -> Result<String, GatewayError> {
        let (system, messages) = types::to_converse_request(system_prompt, conversation)?;
        if messages.is_empty() {
            return Err(GatewayError::RequestFailed(
                "Conversation has no user turn to send".to_string(),
            ));
        }

        debug!(
            model = %self.spec.model,
            temperature = %self.spec.temperature,
            messages = messages.len(),
            "Calling Bedrock Converse API"
        );

        let response = self
            .client
            .converse()
            .model_id(self.spec.model.as_str())
            .set_system((!system.is_empty()).then_some(system))
            .set_messages(Some(messages))
            .inference_config(self.inference_config())
            .send()
            .await
            .map_err(|e| types::convert_converse_error(&e))?;

        debug!(stop_reason = ?response.stop_reason(), "Bedrock response received");

        response
            .output()
            .and_then(types::output_text)
            .ok_or_else(|| GatewayError::RequestFailed("No output in Bedrock response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::{Model, Temperature};
    use aws_sdk_bedrockruntime::config::{BehaviorVersion, Region};

    #[test]
    fn test_debug_shows_spec_and_inference_only() {
        let config = aws_sdk_bedrockruntime::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        let client = BedrockChatClient::new(
            BedrockClient::from_conf(config),
            ClientSpec::new(Model::NovaPro, Temperature::PRECISE),
            InferenceSettings {
                top_p: None,
                max_tokens: Some(256),
            },
        );

        let debug = format!("{:?}", client);
        assert!(debug.starts_with("BedrockChatClient {"));
        assert!(debug.contains("spec"));
        assert!(debug.contains("max_tokens: Some(256)"));
        assert!(!debug.contains("client:"));
    }
}

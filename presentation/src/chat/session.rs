//! Chat state shared by the REPL and its tests

use super::command::ReplCommand;
use advisor_application::{
    AskAdvisorError, AskAdvisorInput, AskAdvisorOutput, AskAdvisorUseCase, ChatModel,
    ClientBuilder,
};
use advisor_domain::{AnswerStyle, ClientSpec, Conversation};

/// What the REPL should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    /// Print this and continue
    Show(String),
    Exit,
}

/// The conversation and the settings selected for it.
///
/// The conversation only grows on successful turns: a failed question is
/// not kept, so the next question is asked against the same history.
pub struct ChatSession<B: ClientBuilder>
where
    B::Client: ChatModel,
{
    use_case: AskAdvisorUseCase<B>,
    conversation: Conversation,
    spec: ClientSpec,
    style: AnswerStyle,
}

impl<B: ClientBuilder> ChatSession<B>
where
    B::Client: ChatModel,
{
    pub fn new(use_case: AskAdvisorUseCase<B>, spec: ClientSpec, style: AnswerStyle) -> Self {
        Self {
            use_case,
            conversation: Conversation::new(),
            spec,
            style,
        }
    }

    pub fn spec(&self) -> &ClientSpec {
        &self.spec
    }

    pub fn style(&self) -> AnswerStyle {
        self.style
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn use_case(&self) -> &AskAdvisorUseCase<B> {
        &self.use_case
    }

    /// Ask `question` in the context of the conversation so far.
    pub async fn ask(&mut self, question: &str) -> Result<AskAdvisorOutput, AskAdvisorError> {
        let mut conversation = self.conversation.clone();
        conversation.add_user_message(question);

        let input = AskAdvisorInput::new(conversation, self.spec.clone(), self.style);
        let output = self.use_case.execute(&input).await?;

        let mut conversation = input.conversation;
        conversation.add_assistant_message(output.answer.clone());
        self.conversation = conversation;
        Ok(output)
    }

    /// Apply a settings command. Listing commands are rendered by the caller.
    pub fn apply(&mut self, command: ReplCommand) -> CommandOutcome {
        match command {
            ReplCommand::Quit => CommandOutcome::Exit,
            ReplCommand::Model(model) => {
                self.spec = self.spec.clone().with_model(model);
                CommandOutcome::Show(format!("Model set to {}", self.spec.model.display_name()))
            }
            ReplCommand::Temperature(temperature) => {
                self.spec = self.spec.clone().with_temperature(temperature);
                CommandOutcome::Show(format!("Temperature set to {}", temperature))
            }
            ReplCommand::Style(style) => {
                self.style = style;
                CommandOutcome::Show(format!("Answer style set to {}", style))
            }
            ReplCommand::Clear => {
                self.conversation.clear();
                CommandOutcome::Show("Started a new conversation".to_string())
            }
            ReplCommand::Help | ReplCommand::Models | ReplCommand::Status => {
                CommandOutcome::Continue
            }
        }
    }
}

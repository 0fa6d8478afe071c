//! Message collection

use serde::{Deserialize, Serialize};

/// A user-facing message directive
///
/// Either literal text or the name of a response template the runtime
/// owns and renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDirective {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Collects the messages an action wants shown to the user
///
/// Actions never talk to the member directly; they queue directives here
/// and the runtime delivers them with its reply.
#[derive(Debug, Default)]
pub struct Dispatcher {
    messages: Vec<MessageDirective>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues literal message text
    pub fn utter(&mut self, text: impl Into<String>) {
        self.messages.push(MessageDirective {
            text: Some(text.into()),
            template: None,
        });
    }

    /// Queues a runtime-rendered response template by name
    pub fn utter_template(&mut self, template: impl Into<String>) {
        self.messages.push(MessageDirective {
            text: None,
            template: Some(template.into()),
        });
    }

    /// Drains the collected directives
    pub fn into_messages(self) -> Vec<MessageDirective> {
        self.messages
    }

    /// The directives collected so far
    pub fn messages(&self) -> &[MessageDirective] {
        &self.messages
    }
}

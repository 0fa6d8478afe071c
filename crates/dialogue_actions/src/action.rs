//! The action contract

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::dispatcher::{Dispatcher, MessageDirective};
use crate::error::ActionError;
use crate::events::Event;
use crate::tracker::Tracker;

/// What one action invocation hands back to the runtime
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    /// Slot changes and followups for the runtime to apply
    pub events: Vec<Event>,
    /// Messages for the runtime to deliver to the user
    pub responses: Vec<MessageDirective>,
}

/// A custom action the dialogue runtime can invoke by name
///
/// Implementations hold their own service handles (ledger, address book,
/// quote service); the runtime supplies only the conversation snapshot.
#[async_trait]
pub trait Action: Send + Sync {
    /// Unique identifier, matching the action name in the runtime's
    /// domain file
    fn name(&self) -> &'static str;

    /// Executes the action for one turn
    async fn run(
        &self,
        tracker: &Tracker,
        dispatcher: &mut Dispatcher,
    ) -> Result<Vec<Event>, ActionError>;
}

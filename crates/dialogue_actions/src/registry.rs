//! Action registry
//!
//! An explicit map from action name to implementation. The webhook layer
//! dispatches by the name the runtime sends; an unregistered name is a
//! per-request error, not a panic.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::action::{Action, ActionResponse};
use crate::dispatcher::Dispatcher;
use crate::error::ActionError;
use crate::tracker::Tracker;

/// Name-keyed lookup of the registered actions
#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: HashMap<&'static str, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an action under its own name
    ///
    /// Registering a second action with the same name replaces the first;
    /// names are expected to be unique in practice.
    pub fn register(mut self, action: impl Action + 'static) -> Self {
        self.actions.insert(action.name(), Arc::new(action));
        self
    }

    /// Names of all registered actions, for the listing endpoint
    pub fn action_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.actions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Runs the named action against a conversation snapshot
    #[instrument(skip(self, tracker), fields(sender_id = %tracker.sender_id))]
    pub async fn dispatch(
        &self,
        action_name: &str,
        tracker: &Tracker,
    ) -> Result<ActionResponse, ActionError> {
        let action = self
            .actions
            .get(action_name)
            .ok_or_else(|| ActionError::UnknownAction(action_name.to_string()))?;

        let mut dispatcher = Dispatcher::new();
        let events = action.run(tracker, &mut dispatcher).await?;

        info!(
            action = action_name,
            events = events.len(),
            messages = dispatcher.messages().len(),
            "action completed"
        );

        Ok(ActionResponse {
            events,
            responses: dispatcher.into_messages(),
        })
    }
}

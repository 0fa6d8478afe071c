//! Slot events returned to the runtime

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A state change the runtime should apply to the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Sets (or clears, with a null value) a slot
    Slot { name: String, value: Value },
    /// Asks the runtime to run another action next
    FollowupAction { name: String },
}

impl Event {
    /// A slot set to a concrete value
    pub fn set_slot(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Event::Slot {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A cleared slot - the runtime will re-prompt for it
    pub fn clear_slot(name: impl Into<String>) -> Self {
        Event::Slot {
            name: name.into(),
            value: Value::Null,
        }
    }

    /// A followup action request
    pub fn followup(name: impl Into<String>) -> Self {
        Event::FollowupAction { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let event = Event::set_slot("claim_id", "123456");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "slot");
        assert_eq!(json["name"], "claim_id");
        assert_eq!(json["value"], "123456");
    }

    #[test]
    fn test_clear_is_null_value() {
        let event = Event::clear_slot("claim_id");
        let json = serde_json::to_value(&event).unwrap();
        assert!(json["value"].is_null());
    }
}

//! Conversation snapshot

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The latest user message as the runtime classified it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestMessage {
    /// Raw message text
    #[serde(default)]
    pub text: String,
    /// Intent name, when the runtime classified one
    #[serde(default)]
    pub intent: Option<String>,
}

/// Snapshot of a conversation at the moment an action is invoked
///
/// Slot values are owned and persisted by the runtime; this is a per-turn
/// read-only view. Anything an action wants to change goes back as an
/// [`crate::events::Event`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tracker {
    /// Conversation sender
    pub sender_id: String,
    /// Current slot values
    #[serde(default)]
    pub slots: HashMap<String, Value>,
    /// The message that triggered this turn
    #[serde(default)]
    pub latest_message: LatestMessage,
}

impl Tracker {
    /// The value of a slot, if set and non-null
    pub fn slot(&self, name: &str) -> Option<&Value> {
        self.slots.get(name).filter(|v| !v.is_null())
    }

    /// A slot's value as a string slice
    pub fn slot_str(&self, name: &str) -> Option<&str> {
        self.slot(name).and_then(Value::as_str)
    }

    /// The slot the form is currently asking for
    pub fn requested_slot(&self) -> Option<&str> {
        self.slot_str(crate::slots::REQUESTED_SLOT)
    }

    /// True if the named slot holds an affirmative answer
    ///
    /// The runtime writes either the affirm intent payload or a literal
    /// yes/no, depending on how the button was pressed.
    pub fn slot_affirmed(&self, name: &str) -> bool {
        match self.slot(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "/affirm" | "affirm" | "yes" | "true")
            }
            _ => false,
        }
    }

    /// True if the named slot holds an explicit negative answer
    pub fn slot_denied(&self, name: &str) -> bool {
        match self.slot(name) {
            Some(Value::Bool(b)) => !*b,
            Some(Value::String(s)) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "/deny" | "deny" | "no" | "false")
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tracker_with(slots: &[(&str, Value)]) -> Tracker {
        Tracker {
            sender_id: "123456".to_string(),
            slots: slots.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            latest_message: LatestMessage::default(),
        }
    }

    #[test]
    fn test_null_slot_reads_as_absent() {
        let tracker = tracker_with(&[("claim_id", Value::Null)]);
        assert!(tracker.slot("claim_id").is_none());
    }

    #[test]
    fn test_affirm_shapes() {
        for value in [json!("/affirm"), json!("yes"), json!(true)] {
            let tracker = tracker_with(&[("confirm", value)]);
            assert!(tracker.slot_affirmed("confirm"));
            assert!(!tracker.slot_denied("confirm"));
        }
    }

    #[test]
    fn test_deny_shapes() {
        for value in [json!("/deny"), json!("no"), json!(false)] {
            let tracker = tracker_with(&[("confirm", value)]);
            assert!(tracker.slot_denied("confirm"));
            assert!(!tracker.slot_affirmed("confirm"));
        }
    }

    #[test]
    fn test_payload_deserializes_with_missing_fields() {
        let tracker: Tracker = serde_json::from_value(json!({
            "sender_id": "123456"
        }))
        .unwrap();
        assert!(tracker.slots.is_empty());
        assert_eq!(tracker.latest_message.text, "");
    }
}

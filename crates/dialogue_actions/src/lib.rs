//! Dialogue Action Layer
//!
//! The callback side of the external dialogue runtime: the runtime owns
//! intent classification, slot-filling orchestration and form lifecycle,
//! and calls into this crate one action at a time. Each invocation gets a
//! conversation snapshot ([`Tracker`]) and produces slot events plus
//! user-facing message directives - nothing else crosses the boundary.
//!
//! Turns are serialized by the runtime: one handler invocation completes,
//! including any store mutation, before the next turn of the same
//! conversation is dispatched. Handlers therefore take a single store
//! round trip and need no in-process locking.
//!
//! Validation and not-found failures are recovered within the turn: the
//! handler utters a message, clears the offending slot so the runtime
//! re-prompts, and succeeds. Store failures abort the turn and surface to
//! the HTTP layer.

pub mod tracker;
pub mod events;
pub mod dispatcher;
pub mod action;
pub mod forms;
pub mod registry;
pub mod slots;
pub mod error;
pub mod actions;

pub use tracker::{Tracker, LatestMessage};
pub use events::Event;
pub use dispatcher::{Dispatcher, MessageDirective};
pub use action::{Action, ActionResponse};
pub use forms::{FormValidator, RequiredSlots, SlotOutcome, SlotValidator};
pub use registry::ActionRegistry;
pub use error::ActionError;

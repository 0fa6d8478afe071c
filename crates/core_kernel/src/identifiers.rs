//! Strongly-typed identifiers for store-issued record IDs
//!
//! Record identifiers in the member store are opaque strings issued by the
//! data store (legacy claims carry plain numeric IDs). Newtype wrappers
//! keep them from being mixed up with free-form user text.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing store-issued identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id!(ClaimId);
define_string_id!(SenderId);

/// Width of the numeric part of a generated claim ID
const FILED_ID_DIGITS: u32 = 6;

impl ClaimId {
    /// Generates an identifier for a newly filed claim
    ///
    /// Filed claims get a fixed-length numeric ID prefixed with "NC",
    /// derived from the wall clock so consecutive filings differ.
    pub fn generate_filed() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let suffix = duration.as_millis() % 10u128.pow(FILED_ID_DIGITS);
        Self(format!("NC{:0width$}", suffix, width = FILED_ID_DIGITS as usize))
    }

    /// Exact-equality match against caller-supplied text
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == raw
    }
}

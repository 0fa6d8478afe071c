//! Recent-claims browsing
//!
//! Pages through the member's claims. The cursor lives in slots between
//! turns and is rebuilt here against the store's current length, so a
//! conversation can pick up browsing after any number of other turns.

use async_trait::async_trait;

use domain_claims::{ClaimLedger, Cursor, PageDirection};
use domain_claims::pagination::DEFAULT_PAGE_SIZE;

use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::error::ActionError;
use crate::events::Event;
use crate::slots;
use crate::tracker::Tracker;

/// Lists one page of the member's claims
pub struct RecentClaimsAction {
    ledger: ClaimLedger,
}

impl RecentClaimsAction {
    pub fn new(ledger: ClaimLedger) -> Self {
        Self { ledger }
    }

    fn restore_cursor(tracker: &Tracker) -> Cursor {
        let index = tracker
            .slot(slots::CLAIMS_PAGE_INDEX)
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as usize;
        Cursor::restore(index, DEFAULT_PAGE_SIZE)
    }

    fn direction(tracker: &Tracker) -> PageDirection {
        tracker
            .slot_str(slots::CLAIMS_PAGE_DIRECTION)
            .and_then(|s| s.parse().ok())
            .unwrap_or(PageDirection::Init)
    }
}

#[async_trait]
impl Action for RecentClaimsAction {
    fn name(&self) -> &'static str {
        "action_recent_claims"
    }

    async fn run(
        &self,
        tracker: &Tracker,
        dispatcher: &mut Dispatcher,
    ) -> Result<Vec<Event>, ActionError> {
        let claims = self.ledger.claims().await?;

        if claims.is_empty() {
            dispatcher.utter("You have no claims on file.");
            return Ok(vec![
                Event::clear_slot(slots::CLAIMS_PAGE_INDEX),
                Event::clear_slot(slots::CLAIMS_PAGE_DIRECTION),
            ]);
        }

        let cursor = Self::restore_cursor(tracker).advance(Self::direction(tracker), claims.len());

        dispatcher.utter("Here are your recent claims:");
        for claim in cursor.page_of(&claims) {
            dispatcher.utter(claim.summary());
        }

        if cursor.is_last_page(claims.len()) {
            dispatcher.utter("That's all of them.");
        } else {
            dispatcher.utter("Say 'next' to see more, or 'previous' to go back.");
        }

        Ok(vec![
            Event::set_slot(slots::CLAIMS_PAGE_INDEX, cursor.index as u64),
            Event::clear_slot(slots::CLAIMS_PAGE_DIRECTION),
        ])
    }
}

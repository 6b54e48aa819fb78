//! Local state for the "my cards" list page.
//!
//! DESIGN
//! ======
//! The list is a transient, owner-filtered copy of the server's cards. It is
//! replaced wholesale on each refresh and otherwise only patched locally
//! (delete removes an entry after the server confirms, like flips a flag with
//! no server call). Each refresh mints a [`RequestToken`]; a response carrying
//! a superseded token is dropped so a slow fetch for a previous user or path
//! cannot overwrite a newer one.

#[cfg(test)]
#[path = "my_cards_test.rs"]
mod my_cards_test;

use super::store::{RequestGeneration, RequestToken};
use crate::net::error::ApiError;
use crate::net::types::Card;

pub const FETCH_CARDS_ERROR: &str = "Error fetching user's cards. Please try again.";
pub const DELETE_CARD_ERROR: &str = "Error deleting card. Please try again.";

#[derive(Clone, Debug, Default)]
pub struct MyCardsState {
    /// Cards owned by the signed-in user, in fetch order.
    pub cards: Vec<Card>,
    pub loading: bool,
    pub error: Option<String>,
    generation: RequestGeneration,
}

impl MyCardsState {
    /// Mark a fetch as in flight and return its token.
    pub fn begin_refresh(&mut self) -> RequestToken {
        self.loading = true;
        self.generation.next()
    }

    /// Reset to the signed-out view: no cards, not loading, and any in-flight
    /// fetch invalidated.
    pub fn sign_out(&mut self) {
        self.generation.next();
        self.cards.clear();
        self.loading = false;
    }

    /// Apply a fetch result. Returns `false` when `token` was superseded and
    /// the result was dropped.
    ///
    /// On failure the previous `cards` stay visible and `error` is set.
    pub fn finish_refresh(&mut self, token: RequestToken, owner_id: &str, result: Result<Vec<Card>, ApiError>) -> bool {
        if !self.generation.is_current(token) {
            return false;
        }
        match result {
            Ok(cards) => self.cards = owned_cards(cards, owner_id),
            Err(_) => self.error = Some(FETCH_CARDS_ERROR.to_owned()),
        }
        self.loading = false;
        true
    }

    /// Remove the card with `card_id`. Returns whether an entry was removed.
    pub fn remove_card(&mut self, card_id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.id != card_id);
        self.cards.len() != before
    }

    pub fn fail_delete(&mut self) {
        self.error = Some(DELETE_CARD_ERROR.to_owned());
    }

    /// Set `liked` on the card with `card_id`. Returns whether it was found.
    pub fn set_liked(&mut self, card_id: &str, liked: bool) -> bool {
        match self.cards.iter_mut().find(|card| card.id == card_id) {
            Some(card) => {
                card.liked = liked;
                true
            }
            None => false,
        }
    }
}

/// Keep only the cards created by `owner_id`, preserving order.
pub fn owned_cards(cards: Vec<Card>, owner_id: &str) -> Vec<Card> {
    cards.into_iter().filter(|card| card.owner_id == owner_id).collect()
}

//! Storage seam between page orchestration and reactive state.
//!
//! DESIGN
//! ======
//! Page flows (`pages::my_cards`, `pages::edit_user`) only need to read and
//! mutate their state between awaits. Routing that through [`StateCell`] lets
//! the browser hand them an `RwSignal` while unit tests hand them a `RefCell`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update, WithUntracked};

/// Shared handle to a piece of page state.
///
/// Both methods return `None` when the underlying storage is gone, e.g. a
/// signal disposed because its page unmounted while a request was in flight.
pub trait StateCell<S> {
    fn mutate<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;
    fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;
}

impl<S> StateCell<S> for RefCell<S> {
    fn mutate<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut *self.borrow_mut()))
    }

    fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        Some(f(&*self.borrow()))
    }
}

impl<S: Send + Sync + 'static> StateCell<S> for RwSignal<S> {
    fn mutate<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

/// Identifies one outstanding request; see [`RequestGeneration`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonic request counter. Only the most recently issued token is current,
/// so responses to superseded requests can be dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    /// Issue a new token, invalidating every earlier one.
    pub fn next(&mut self) -> RequestToken {
        self.current += 1;
        RequestToken(self.current)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.current
    }
}

use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::types::{Address, Card};
use crate::state::my_cards::{DELETE_CARD_ERROR, FETCH_CARDS_ERROR};

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct FakeCardsApi {
    list_response: RefCell<Option<Result<Vec<Card>, ApiError>>>,
    fail_delete: Cell<bool>,
    list_calls: Cell<usize>,
    deleted: RefCell<Vec<String>>,
}

impl FakeCardsApi {
    fn listing(cards: Vec<Card>) -> Self {
        let api = Self::default();
        *api.list_response.borrow_mut() = Some(Ok(cards));
        api
    }

    fn failing_list() -> Self {
        let api = Self::default();
        *api.list_response.borrow_mut() = Some(Err(ApiError::Network("offline".to_owned())));
        api
    }

    fn total_calls(&self) -> usize {
        self.list_calls.get() + self.deleted.borrow().len()
    }
}

impl CardsApi for FakeCardsApi {
    async fn fetch_my_cards(&self) -> Result<Vec<Card>, ApiError> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.list_response.borrow().clone().unwrap_or(Ok(Vec::new()))
    }

    async fn delete_card(&self, card_id: &str) -> Result<(), ApiError> {
        self.deleted.borrow_mut().push(card_id.to_owned());
        if self.fail_delete.get() { Err(ApiError::Status { status: 500 }) } else { Ok(()) }
    }
}

fn card(id: &str, owner_id: &str) -> Card {
    Card {
        id: id.to_owned(),
        owner_id: owner_id.to_owned(),
        title: format!("Card {id}"),
        subtitle: String::new(),
        phone: String::new(),
        address: Address::default(),
        image: None,
        liked: false,
    }
}

fn session(id: &str, is_business: bool) -> SessionUser {
    SessionUser { id: id.to_owned(), is_business, is_admin: false }
}

fn ids(cards: &RefCell<MyCardsState>) -> Vec<String> {
    cards.borrow().cards.iter().map(|c| c.id.clone()).collect()
}

fn loaded(list: Vec<Card>) -> RefCell<MyCardsState> {
    let mut state = MyCardsState::default();
    state.cards = list;
    RefCell::new(state)
}

// =============================================================
// refresh_cards
// =============================================================

#[test]
fn refresh_renders_only_current_users_cards() {
    let api = FakeCardsApi::listing(vec![card("a", "u1"), card("b", "u2"), card("c", "u1")]);
    let cards = RefCell::new(MyCardsState::default());

    block_on(refresh_cards(&api, Some(&session("u1", false)), &cards));

    assert_eq!(ids(&cards), vec!["a", "c"]);
    assert!(!cards.borrow().loading);
    assert_eq!(api.list_calls.get(), 1);
}

#[test]
fn refresh_without_session_issues_no_request() {
    let api = FakeCardsApi::listing(vec![card("a", "u1")]);
    let cards = RefCell::new(MyCardsState::default());

    block_on(refresh_cards(&api, None, &cards));

    assert_eq!(api.total_calls(), 0);
    assert!(cards.borrow().cards.is_empty());
    assert!(!cards.borrow().loading);
    assert!(cards.borrow().error.is_none());
}

#[test]
fn refresh_failure_sets_error_and_keeps_cards() {
    let api = FakeCardsApi::failing_list();
    let cards = loaded(vec![card("a", "u1")]);

    block_on(refresh_cards(&api, Some(&session("u1", false)), &cards));

    assert_eq!(ids(&cards), vec!["a"]);
    assert_eq!(cards.borrow().error.as_deref(), Some(FETCH_CARDS_ERROR));
    assert!(!cards.borrow().loading);
}

#[test]
fn refresh_for_new_user_replaces_list() {
    let api = FakeCardsApi::listing(vec![card("a", "u1"), card("b", "u2")]);
    let cards = RefCell::new(MyCardsState::default());

    block_on(refresh_cards(&api, Some(&session("u1", false)), &cards));
    block_on(refresh_cards(&api, Some(&session("u2", false)), &cards));

    assert_eq!(ids(&cards), vec!["b"]);
    assert_eq!(api.list_calls.get(), 2);
}

// =============================================================
// delete_card
// =============================================================

#[test]
fn delete_removes_entry_after_single_request() {
    let api = FakeCardsApi::default();
    let cards = loaded(vec![card("a", "u1"), card("b", "u1")]);

    block_on(delete_card(&api, "a", &cards));

    assert_eq!(*api.deleted.borrow(), vec!["a".to_owned()]);
    assert_eq!(ids(&cards), vec!["b"]);
    assert!(cards.borrow().error.is_none());
}

#[test]
fn delete_failure_keeps_entry_and_sets_error() {
    let api = FakeCardsApi::default();
    api.fail_delete.set(true);
    let cards = loaded(vec![card("a", "u1")]);

    block_on(delete_card(&api, "a", &cards));

    assert_eq!(api.deleted.borrow().len(), 1);
    assert_eq!(ids(&cards), vec!["a"]);
    assert_eq!(cards.borrow().error.as_deref(), Some(DELETE_CARD_ERROR));
}

#[test]
fn delete_unknown_id_still_requests_once_and_leaves_list() {
    let api = FakeCardsApi::default();
    let cards = loaded(vec![card("a", "u1")]);

    block_on(delete_card(&api, "zzz", &cards));

    assert_eq!(*api.deleted.borrow(), vec!["zzz".to_owned()]);
    assert_eq!(ids(&cards), vec!["a"]);
}

// =============================================================
// toggle_like
// =============================================================

#[test]
fn toggle_like_flips_only_target_without_network() {
    let api = FakeCardsApi::default();
    let cards = loaded(vec![card("a", "u1"), card("b", "u1")]);

    toggle_like(&cards, "a", true);

    let state = cards.borrow();
    assert!(state.cards[0].liked);
    assert!(!state.cards[1].liked);
    assert_eq!(api.total_calls(), 0);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn request_create_navigates_for_business_user() {
    let visited = RefCell::new(Vec::new());
    let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());

    assert!(request_create(&AuthState { user: Some(session("u1", true)) }, &navigate));
    assert_eq!(*visited.borrow(), vec![routes::CREATE_CARD.to_owned()]);
}

#[test]
fn request_create_navigates_for_admin() {
    let visited = RefCell::new(Vec::new());
    let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());
    let admin = SessionUser { id: "u9".to_owned(), is_business: false, is_admin: true };

    assert!(request_create(&AuthState { user: Some(admin) }, &navigate));
    assert_eq!(visited.borrow().len(), 1);
}

#[test]
fn request_create_is_noop_for_regular_or_missing_user() {
    let visited = RefCell::new(Vec::<String>::new());
    let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());

    assert!(!request_create(&AuthState { user: Some(session("u1", false)) }, &navigate));
    assert!(!request_create(&AuthState::default(), &navigate));
    assert!(visited.borrow().is_empty());
}

#[test]
fn request_edit_navigates_to_card_edit_route() {
    let visited = RefCell::new(Vec::new());
    let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());

    request_edit("c-7", &navigate);

    assert_eq!(*visited.borrow(), vec!["/edit-card/c-7".to_owned()]);
}

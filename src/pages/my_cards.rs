//! "My cards" page listing the signed-in user's business cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the card inventory whenever the signed-in identity or the current
//! path changes, keeps the cards owned by that user, and patches the list
//! locally on delete and like. Creation and editing happen on other routes.
//!
//! The async flows below are generic over [`CardsApi`] and [`StateCell`] so
//! they run unchanged against the HTTP client and a page signal in the
//! browser, or a fake API and a `RefCell` in tests.

#[cfg(test)]
#[path = "my_cards_test.rs"]
mod my_cards_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::business_card::{BusinessCard, CardDisplay};
use crate::net::api::{CardsApi, HttpApi};
use crate::net::types::SessionUser;
use crate::routes;
use crate::state::auth::AuthState;
use crate::state::my_cards::MyCardsState;
use crate::state::store::StateCell;

/// Refetch the list for `session`.
///
/// Without a session no request is made and the list is cleared.
pub async fn refresh_cards<A, C>(api: &A, session: Option<&SessionUser>, cards: &C)
where
    A: CardsApi,
    C: StateCell<MyCardsState>,
{
    let Some(user) = session else {
        log::warn!("my cards: no signed-in user, skipping fetch");
        cards.mutate(MyCardsState::sign_out);
        return;
    };
    let Some(token) = cards.mutate(MyCardsState::begin_refresh) else {
        return;
    };

    let result = api.fetch_my_cards().await;
    if let Err(e) = &result {
        log::error!("my cards: fetch failed: {e}");
    }
    if cards.mutate(|s| s.finish_refresh(token, &user.id, result)) == Some(false) {
        log::debug!("my cards: dropped response for superseded fetch");
    }
}

/// Delete `card_id` on the server, then drop it from the local list.
///
/// A failed delete leaves the list untouched and shows an error; there is no
/// retry.
pub async fn delete_card<A, C>(api: &A, card_id: &str, cards: &C)
where
    A: CardsApi,
    C: StateCell<MyCardsState>,
{
    match api.delete_card(card_id).await {
        Ok(()) => {
            cards.mutate(|s| s.remove_card(card_id));
        }
        Err(e) => {
            log::error!("my cards: delete {card_id} failed: {e}");
            cards.mutate(MyCardsState::fail_delete);
        }
    }
}

/// Local-only like toggle. The like state is not sent to the server.
pub fn toggle_like<C>(cards: &C, card_id: &str, liked: bool)
where
    C: StateCell<MyCardsState>,
{
    cards.mutate(|s| s.set_liked(card_id, liked));
}

/// Navigate to card creation if the user may create cards. Returns whether
/// navigation happened.
pub fn request_create<F>(auth: &AuthState, navigate: &F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    if auth.can_create_cards() {
        navigate(routes::CREATE_CARD, NavigateOptions::default());
        true
    } else {
        log::info!("Only business users or admins can create cards.");
        false
    }
}

pub fn request_edit<F>(card_id: &str, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    navigate(&routes::edit_card_path(card_id), NavigateOptions::default());
}

/// My cards page — create button, status lines and the card grid.
#[component]
pub fn MyCardsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<HttpApi>();
    let navigate = use_navigate();
    let location = use_location();

    let cards = RwSignal::new(MyCardsState::default());
    let session = Memo::new(move |_| auth.with(|a| a.user.clone()));

    let refresh_api = api.clone();
    Effect::new(move || {
        let session = session.get();
        let path = location.pathname.get();
        log::debug!("my cards: refresh for {path}");

        #[cfg(feature = "csr")]
        {
            let api = refresh_api.clone();
            leptos::task::spawn_local(async move {
                refresh_cards(&api, session.as_ref(), &cards).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&refresh_api, session);
        }
    });

    let navigate_create = navigate.clone();
    let on_create = move |_| {
        auth.with_untracked(|a| request_create(a, &navigate_create));
    };

    let on_edit = Callback::new(move |card_id: String| request_edit(&card_id, &navigate));

    let on_delete = Callback::new(move |card_id: String| {
        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                delete_card(&api, &card_id, &cards).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, card_id);
        }
    });

    let on_like_change = Callback::new(move |(card_id, liked): (String, bool)| toggle_like(&cards, &card_id, liked));

    view! {
        <div class="my-cards-page">
            <header class="my-cards-page__header">
                <button class="btn btn--primary my-cards-page__create" on:click=on_create>
                    "Create Card"
                </button>
            </header>

            <Show when=move || cards.with(|s| s.loading)>
                <p class="my-cards-page__loading">"Loading..."</p>
            </Show>
            <Show when=move || cards.with(|s| s.error.is_some())>
                <p class="my-cards-page__error">{move || cards.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <div class="my-cards-page__grid">
                {move || {
                    let displays = cards.with(|s| s.cards.iter().map(CardDisplay::from).collect::<Vec<_>>());
                    if displays.is_empty() {
                        view! { <p class="my-cards-page__empty">"No cards found."</p> }.into_any()
                    } else {
                        displays
                            .into_iter()
                            .map(|display| {
                                view! {
                                    <BusinessCard
                                        display=display
                                        on_edit=on_edit
                                        on_delete=on_delete
                                        on_like_change=on_like_change
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

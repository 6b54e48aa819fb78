//! Presentational card for one entry of the "my cards" grid.
//!
//! DESIGN
//! ======
//! The component only renders display props and reports edit/delete/like
//! clicks through callbacks keyed by card id; the page owns all state.

#[cfg(test)]
#[path = "business_card_test.rs"]
mod business_card_test;

use leptos::prelude::*;

use crate::net::types::Card;

/// Display props derived from a [`Card`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDisplay {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub phone: String,
    pub address: String,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub liked: bool,
}

impl From<&Card> for CardDisplay {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id.clone(),
            title: card.title.clone(),
            subtitle: card.subtitle.clone(),
            phone: card.phone.clone(),
            address: card.address_line(),
            image_url: card.image.as_ref().map(|i| i.url.clone()),
            image_alt: card.image.as_ref().map(|i| i.alt.clone()),
            liked: card.liked,
        }
    }
}

/// A business card with edit, delete and like buttons.
#[component]
pub fn BusinessCard(
    display: CardDisplay,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
    on_like_change: Callback<(String, bool)>,
) -> impl IntoView {
    let CardDisplay { id, title, subtitle, phone, address, image_url, image_alt, liked } = display;
    let like_label = if liked { "Unlike" } else { "Like" };

    let edit_id = id.clone();
    let delete_id = id.clone();
    let like_id = id;

    view! {
        <article class="business-card" class:business-card--liked=liked>
            {image_url
                .map(|url| {
                    view! {
                        <img class="business-card__image" src=url alt={image_alt.unwrap_or_default()}/>
                    }
                })}
            <h3 class="business-card__title">{title}</h3>
            <p class="business-card__subtitle">{subtitle}</p>
            <div class="business-card__divider"></div>
            <p class="business-card__row">
                <span class="business-card__label">"Phone: "</span>
                {phone}
            </p>
            <p class="business-card__row">
                <span class="business-card__label">"Address: "</span>
                {address}
            </p>
            <div class="business-card__actions">
                <button class="btn business-card__edit" on:click=move |_| on_edit.run(edit_id.clone()) title="Edit card">
                    "Edit"
                </button>
                <button
                    class="btn business-card__delete"
                    on:click=move |_| on_delete.run(delete_id.clone())
                    title="Delete card"
                    aria-label="Delete card"
                >
                    "✕"
                </button>
                <button
                    class="btn business-card__like"
                    aria-pressed={if liked { "true" } else { "false" }}
                    on:click=move |_| on_like_change.run((like_id.clone(), !liked))
                    title=like_label
                >
                    {if liked { "♥" } else { "♡" }}
                </button>
            </div>
        </article>
    }
}

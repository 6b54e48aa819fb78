//! Edit-user page: load one user, edit a flat copy of its fields, push a full
//! replacement back.
//!
//! Failures on this page are logged only. A failed load leaves the page on
//! its loading placeholder; a failed update gives no feedback.

#[cfg(test)]
#[path = "edit_user_test.rs"]
mod edit_user_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api::{HttpApi, UsersApi};
use crate::state::store::StateCell;
use crate::state::user_edit::{UserEditState, UserField};

/// Fetch `user_id` and mirror it into the form.
pub async fn load_user<A, C>(api: &A, user_id: &str, form: &C)
where
    A: UsersApi,
    C: StateCell<UserEditState>,
{
    let Some(token) = form.mutate(UserEditState::begin_load) else {
        return;
    };
    match api.fetch_user(user_id).await {
        Ok(user) => {
            if form.mutate(|s| s.finish_load(token, user)) == Some(false) {
                log::debug!("edit user: dropped response for superseded user {user_id}");
            }
        }
        Err(e) => log::error!("Error fetching user {user_id}: {e}"),
    }
}

/// Send the form as a full replacement for `user_id`. Returns whether the
/// server accepted it.
pub async fn submit_user<A, C>(api: &A, user_id: &str, form: &C) -> bool
where
    A: UsersApi,
    C: StateCell<UserEditState>,
{
    let Some(update) = form.inspect(UserEditState::build_update) else {
        return false;
    };
    match api.update_user(user_id, &update).await {
        Ok(()) => {
            log::info!("User ID {user_id} details updated");
            true
        }
        Err(e) => {
            log::error!("Error updating user {user_id}: {e}");
            false
        }
    }
}

/// Edit-user page bound to the `:user_id` route parameter.
#[component]
pub fn EditUserPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let params = use_params_map();
    let user_id = Memo::new(move |_| params.with(|p| p.get("user_id").unwrap_or_default()));
    let form = RwSignal::new(UserEditState::default());

    let load_api = api.clone();
    Effect::new(move || {
        let id = user_id.get();
        #[cfg(feature = "csr")]
        {
            let api = load_api.clone();
            leptos::task::spawn_local(async move {
                load_user(&api, &id, &form).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&load_api, id);
        }
    });

    let on_submit = move |_: leptos::ev::MouseEvent| {
        let id = user_id.get_untracked();
        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                submit_user(&api, &id, &form).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, id);
        }
    };

    view! {
        <Show
            when=move || form.with(|s| s.user.is_some())
            fallback=|| view! { <p class="edit-user-page__loading">"Loading..."</p> }
        >
            <div class="edit-user-page">
                <h1>"Edit User Details"</h1>
                <p class="edit-user-page__id">
                    "User ID: "
                    {move || form.with(|s| s.user.as_ref().map(|u| u.id.clone()).unwrap_or_default())}
                </p>
                {UserField::ALL
                    .into_iter()
                    .map(|field| view! { <FieldInput field=field form=form/> })
                    .collect::<Vec<_>>()}
                <button class="btn btn--primary edit-user-page__submit" on:click={on_submit.clone()}>
                    "Update User"
                </button>
            </div>
        </Show>
    }
}

/// One two-way bound text input.
#[component]
fn FieldInput(field: UserField, form: RwSignal<UserEditState>) -> impl IntoView {
    view! {
        <label class="edit-user-page__label">
            {field.label()}
            <input
                class="edit-user-page__input"
                type="text"
                name={field.name()}
                prop:value=move || form.with(|s| s.field_value(field).to_owned())
                on:input=move |ev| form.update(|s| s.update_field(field, event_target_value(&ev)))
            />
        </label>
    }
}

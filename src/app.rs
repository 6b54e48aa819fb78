//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::api::HttpApi;
use crate::pages::{edit_user::EditUserPage, my_cards::MyCardsPage};
use crate::routes;
use crate::state::auth::AuthState;

/// Root application component.
///
/// Provides the auth session and API client contexts and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    log::info!("bcard client starting; cards api at {}", config.cards_base_url);

    provide_context(RwSignal::new(AuthState::restore()));
    provide_context(HttpApi::new(config));

    view! {
        <Stylesheet id="leptos" href="/pkg/bcard-client.css"/>
        <Title text="BCard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path={routes::MY_CARDS}/> }/>
                <Route path=StaticSegment(routes::MY_CARDS_SEGMENT) view=MyCardsPage/>
                <Route
                    path=(StaticSegment(routes::EDIT_USER_SEGMENT), ParamSegment("user_id"))
                    view=EditUserPage
                />
            </Routes>
        </Router>
    }
}

//! REST API client for the bcard card and user endpoints.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; pages decide whether a failure
//! becomes a visible message or a log line.

#![allow(clippy::unused_async, async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Card, User, UserUpdate};
use crate::config::ApiConfig;

pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Card operations used by the "my cards" page.
pub trait CardsApi {
    /// `GET /bcard2/cards/my-cards`. The response may include other users' cards.
    async fn fetch_my_cards(&self) -> Result<Vec<Card>, ApiError>;

    /// `DELETE /bcard2/cards/{card_id}`. The response body is ignored.
    async fn delete_card(&self, card_id: &str) -> Result<(), ApiError>;
}

/// User operations used by the edit-user page.
pub trait UsersApi {
    /// `GET /users/{user_id}`.
    async fn fetch_user(&self, user_id: &str) -> Result<User, ApiError>;

    /// `PUT /users/{user_id}` with a full replacement body.
    async fn update_user(&self, user_id: &str, update: &UserUpdate) -> Result<(), ApiError>;
}

/// HTTP implementation of [`CardsApi`] and [`UsersApi`].
#[derive(Clone, Debug)]
pub struct HttpApi {
    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[cfg(any(test, feature = "csr"))]
fn my_cards_endpoint(config: &ApiConfig) -> String {
    format!("{}/bcard2/cards/my-cards", config.cards_base_url)
}

#[cfg(any(test, feature = "csr"))]
fn card_endpoint(config: &ApiConfig, card_id: &str) -> String {
    format!("{}/bcard2/cards/{card_id}", config.cards_base_url)
}

#[cfg(any(test, feature = "csr"))]
fn user_endpoint(config: &ApiConfig, user_id: &str) -> String {
    format!("{}/users/{user_id}", config.users_base_url)
}

#[cfg(feature = "csr")]
fn with_auth(builder: gloo_net::http::RequestBuilder, config: &ApiConfig) -> gloo_net::http::RequestBuilder {
    match config.auth_token.as_deref() {
        Some(token) => builder.header(AUTH_TOKEN_HEADER, token),
        None => builder,
    }
}

#[cfg(feature = "csr")]
fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(ApiError::Status { status: resp.status() })
    }
}

impl CardsApi for HttpApi {
    async fn fetch_my_cards(&self) -> Result<Vec<Card>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = my_cards_endpoint(&self.config);
            let resp = with_auth(gloo_net::http::Request::get(&url), &self.config)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(&resp)?;
            resp.json::<Vec<Card>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_card(&self, card_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = card_endpoint(&self.config, card_id);
            let resp = with_auth(gloo_net::http::Request::delete(&url), &self.config)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(&resp)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = card_id;
            Err(ApiError::Unavailable)
        }
    }
}

impl UsersApi for HttpApi {
    async fn fetch_user(&self, user_id: &str) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = user_endpoint(&self.config, user_id);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(&resp)?;
            resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = user_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn update_user(&self, user_id: &str, update: &UserUpdate) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = user_endpoint(&self.config, user_id);
            let resp = gloo_net::http::Request::put(&url)
                .json(update)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(&resp)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user_id, update);
            Err(ApiError::Unavailable)
        }
    }
}

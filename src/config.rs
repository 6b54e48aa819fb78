//! API configuration established once at startup.
//!
//! Browser builds have no process environment, so values are captured at
//! compile time and fall back to the public deployment defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CARDS_API_URL: &str = "https://monkfish-app-z9uza.ondigitalocean.app";
pub const DEFAULT_USERS_API_URL: &str = "";

/// Endpoints and credential used by the HTTP client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin hosting the `/bcard2/cards` routes.
    pub cards_base_url: String,
    /// Origin hosting the `/users` routes. Empty means same-origin.
    pub users_base_url: String,
    /// Value sent as `x-auth-token` on card requests.
    pub auth_token: Option<String>,
}

impl ApiConfig {
    /// Build config from compile-time variables.
    ///
    /// Optional:
    /// - `BCARD_CARDS_API_URL`: default [`DEFAULT_CARDS_API_URL`]
    /// - `BCARD_USERS_API_URL`: default same-origin
    /// - `BCARD_API_TOKEN`: no credential when absent
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("BCARD_CARDS_API_URL"),
            option_env!("BCARD_USERS_API_URL"),
            option_env!("BCARD_API_TOKEN"),
        )
    }

    fn from_values(cards: Option<&str>, users: Option<&str>, token: Option<&str>) -> Self {
        Self {
            cards_base_url: normalize_base_url(cards.unwrap_or(DEFAULT_CARDS_API_URL)),
            users_base_url: normalize_base_url(users.unwrap_or(DEFAULT_USERS_API_URL)),
            auth_token: token.map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned),
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

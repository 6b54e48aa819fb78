//! Wire DTOs for the bcard REST API.
//!
//! DESIGN
//! ======
//! Field names follow the API's JSON (`_id`, `user_id`, `houseNumber`, `like`)
//! through serde renames so the Rust side can use its own naming. Unknown
//! fields are ignored and missing display fields default to empty strings,
//! since the API is not consistent about which optional fields it returns.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A postal address as stored on cards and users.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub street: String,
    /// The API stores this as a number; the form edits it as free text.
    #[serde(rename = "houseNumber", default, deserialize_with = "deserialize_string_or_number")]
    pub house_number: String,
}

/// Image reference attached to a card or user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

/// A business card as returned by `GET /bcard2/cards/my-cards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique card identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// User who created the card.
    #[serde(rename = "user_id", default)]
    pub owner_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub phone: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub image: Option<Image>,
    /// Client-side like flag. Never persisted by this client.
    #[serde(rename = "like", default)]
    pub liked: bool,
}

impl Card {
    /// Display line shown on the card: `"{city}, {street} {houseNumber}"`.
    pub fn address_line(&self) -> String {
        let Address { city, street, house_number, .. } = &self.address;
        format!("{city}, {street} {house_number}")
    }
}

/// Structured user name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub middle: String,
    #[serde(default)]
    pub last: String,
}

/// A user record as returned by `GET /users/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: UserName,
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub phone: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(rename = "isBusiness", default)]
    pub is_business: bool,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

/// Full replacement body for `PUT /users/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: UserName,
    pub phone: String,
    pub address: Address,
    pub image: Image,
}

/// Identity of the signed-in user held by the auth store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "isBusiness", default)]
    pub is_business: bool,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

impl SessionUser {
    /// Business and admin accounts may create cards.
    pub fn can_create_cards(&self) -> bool {
        self.is_business || self.is_admin
    }
}

fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

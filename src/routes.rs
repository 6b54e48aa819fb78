//! Route paths shared by the router and page navigation.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const MY_CARDS: &str = "/my-cards";
pub const MY_CARDS_SEGMENT: &str = "my-cards";
pub const CREATE_CARD: &str = "/create-card";
pub const EDIT_CARD: &str = "/edit-card";
pub const EDIT_USER: &str = "/edit-user";
pub const EDIT_USER_SEGMENT: &str = "edit-user";

/// Path of the edit page for `card_id`.
pub fn edit_card_path(card_id: &str) -> String {
    format!("{EDIT_CARD}/{card_id}")
}

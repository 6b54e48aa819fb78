//! Form state for the edit-user page.
//!
//! The fetched `User` only gates rendering and supplies the displayed id; the
//! editable fields are a flat shadow copy that the form mutates freely.

#[cfg(test)]
#[path = "user_edit_test.rs"]
mod user_edit_test;

use super::store::{RequestGeneration, RequestToken};
use crate::net::types::{Address, Image, User, UserName, UserUpdate};

// TODO: send the fetched middle/last names once product confirms these placeholders are unintended.
/// Sent as `name.middle` on every update. The form does not edit it.
pub const PLACEHOLDER_MIDDLE_NAME: &str = "the";
/// Sent as `name.last` on every update. The form does not edit it.
pub const PLACEHOLDER_LAST_NAME: &str = "user";

/// One editable text input on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserField {
    FirstName,
    Phone,
    Country,
    City,
    Street,
    HouseNumber,
}

impl UserField {
    /// Inputs in display order.
    pub const ALL: [Self; 6] =
        [Self::FirstName, Self::Phone, Self::Country, Self::City, Self::Street, Self::HouseNumber];

    /// Input `name` attribute, matching the JSON field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "first",
            Self::Phone => "phone",
            Self::Country => "country",
            Self::City => "city",
            Self::Street => "street",
            Self::HouseNumber => "houseNumber",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::Phone => "Phone",
            Self::Country => "Country",
            Self::City => "City",
            Self::Street => "Street",
            Self::HouseNumber => "House number",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UserEditState {
    /// Last fetched snapshot; `None` renders the loading placeholder.
    pub user: Option<User>,
    pub name: String,
    pub phone: String,
    pub address: Address,
    generation: RequestGeneration,
}

impl UserEditState {
    /// Start loading a (possibly different) user. Clears the form so fields of
    /// the previous user are never shown under the new id.
    pub fn begin_load(&mut self) -> RequestToken {
        self.user = None;
        self.name.clear();
        self.phone.clear();
        self.address = Address::default();
        self.generation.next()
    }

    /// Populate the form from a fetched user. Returns `false` when `token` was
    /// superseded and the user was dropped.
    pub fn finish_load(&mut self, token: RequestToken, user: User) -> bool {
        if !self.generation.is_current(token) {
            return false;
        }
        self.name = user.name.first.clone();
        self.phone = user.phone.clone();
        self.address = user.address.clone();
        self.user = Some(user);
        true
    }

    pub fn field_value(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.name,
            UserField::Phone => &self.phone,
            UserField::Country => &self.address.country,
            UserField::City => &self.address.city,
            UserField::Street => &self.address.street,
            UserField::HouseNumber => &self.address.house_number,
        }
    }

    /// Overwrite one field. No validation is applied.
    pub fn update_field(&mut self, field: UserField, value: String) {
        let slot = match field {
            UserField::FirstName => &mut self.name,
            UserField::Phone => &mut self.phone,
            UserField::Country => &mut self.address.country,
            UserField::City => &mut self.address.city,
            UserField::Street => &mut self.address.street,
            UserField::HouseNumber => &mut self.address.house_number,
        };
        *slot = value;
    }

    /// Full replacement body for the update request. The image is always
    /// cleared.
    pub fn build_update(&self) -> UserUpdate {
        UserUpdate {
            name: UserName {
                first: self.name.clone(),
                middle: PLACEHOLDER_MIDDLE_NAME.to_owned(),
                last: PLACEHOLDER_LAST_NAME.to_owned(),
            },
            phone: self.phone.clone(),
            address: self.address.clone(),
            image: Image::default(),
        }
    }
}

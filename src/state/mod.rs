//! Client-side page state modules.
//!
//! DESIGN
//! ======
//! State is split by page (`my_cards`, `user_edit`) plus the shared `auth`
//! session, so each page depends on a small focused model. `store` holds the
//! seam that lets page flows run against signals or plain cells.

pub mod auth;
pub mod my_cards;
pub mod store;
pub mod user_edit;

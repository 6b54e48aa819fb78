//! Networking modules for the bcard REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` classifies their failures, and
//! `types` defines the JSON schema shared with the server.

pub mod api;
pub mod error;
pub mod types;

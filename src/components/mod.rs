//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render display props and report user actions through callbacks;
//! pages own the state they act on.

pub mod business_card;

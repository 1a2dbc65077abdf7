//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and the settings surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod hero;
pub mod login_modal;
pub mod role_panel;
pub mod settings_panel;
pub mod top_nav;

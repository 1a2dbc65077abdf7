//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `settings`) and provided to the view
//! tree as `RwSignal`s through Leptos context. The static demo account table
//! lives beside the session state it produces.

pub mod credentials;
pub mod session;
pub mod settings;

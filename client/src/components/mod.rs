//! Page section and chrome components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render static portfolio content and read theme / scroll-spy
//! state from Leptos context providers set up in `app`.

pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod skills;
pub mod theme_toggle;

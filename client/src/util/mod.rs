//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns behind small host
//! traits so page and component logic stays testable without a browser.

#[cfg(feature = "hydrate")]
pub mod dom_visibility;
pub mod theme_preference;
pub mod viewport;

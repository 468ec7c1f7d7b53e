//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `sections`, `reveal`) so components
//! depend on small focused models. Only `theme` is persisted.

pub mod reveal;
pub mod sections;
pub mod theme;

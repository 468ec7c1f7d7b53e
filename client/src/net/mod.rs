//! Outbound requests. Currently only the (stubbed) contact form.

pub mod contact;

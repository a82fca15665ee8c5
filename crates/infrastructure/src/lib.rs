//! Prefer DNS Infrastructure Layer
pub mod dns;

/// Verification module - credential checks and allow-list lookup
pub mod allowlist;
pub mod credential;
pub mod digest;
pub mod username;
pub mod verifier;

pub use username::current_username;
pub use verifier::Verifier;

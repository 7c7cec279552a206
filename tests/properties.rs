//! Property tests for Hearth.
//!
//! Properties use randomized input generation to protect the invariants
//! that make reconciliation trustworthy: fingerprints depend only on
//! content, and ids compare equal exactly when they normalize equal.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/asset_id.rs"]
mod asset_id;

#[path = "properties/fingerprint.rs"]
mod fingerprint;

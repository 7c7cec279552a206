//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_id;
mod fingerprint;
mod hash;
mod tracked;

pub use asset_id::AssetId;
pub use fingerprint::Fingerprint;
pub use hash::ContentHash;
pub use tracked::TrackedSet;

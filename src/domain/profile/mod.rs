//! Profile domain — the user profile form behind `/profile`.

pub mod client;
pub mod wire;

pub use wire::Profile;

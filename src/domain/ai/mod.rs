//! AI domain — recommendations and feedback behind `/ai/*`.

pub mod client;
pub mod wire;

pub use wire::{FeedbackKind, FeedbackRequest, Recommendation};

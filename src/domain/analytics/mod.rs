//! Analytics domain — `/analytics/*` aggregates.

pub mod client;

//! Domain modules (vertical slices): wire types and sub-clients.

pub mod ai;
pub mod analytics;
pub mod graph;
pub mod profile;
pub mod task;

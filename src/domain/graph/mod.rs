//! Graph domain — the `/neo4j/query` forwarding surface.

pub mod client;
pub mod wire;

pub use wire::{GraphQueryRequest, GraphQueryResponse};

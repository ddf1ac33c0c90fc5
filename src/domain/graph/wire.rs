//! Wire types for the graph-database passthrough (REST).
//!
//! The backend forwards these verbatim to Neo4j; the SDK treats both the
//! Cypher text and the result records as opaque.

use serde::{Deserialize, Serialize};

/// `POST /neo4j/query` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQueryRequest {
    pub query: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Result records, one JSON object per row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphQueryResponse {
    #[serde(default)]
    pub records: Vec<serde_json::Value>,
}

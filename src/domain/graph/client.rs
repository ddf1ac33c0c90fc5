//! Graph sub-client — Cypher passthrough to the backend's Neo4j instance.

use crate::client::FocusFlowClient;
use crate::domain::graph::wire::{GraphQueryRequest, GraphQueryResponse};
use crate::error::{HttpError, SdkError};

pub struct Graph<'a> {
    pub(crate) client: &'a FocusFlowClient,
}

impl<'a> Graph<'a> {
    /// Run a Cypher query with parameters.
    pub async fn query(
        &self,
        query: &str,
        params: serde_json::Value,
    ) -> Result<GraphQueryResponse, SdkError> {
        let request = GraphQueryRequest {
            query: query.to_string(),
            params,
        };
        Ok(self.client.http.graph_query(&request).await?)
    }

    /// Cheap connectivity probe: `RETURN 1 AS result`.
    pub async fn test_connection(&self) -> Result<bool, SdkError> {
        match self.query("RETURN 1 AS result", serde_json::json!({})).await {
            Ok(_) => Ok(true),
            // Auth failures are the caller's problem, not a connectivity verdict.
            Err(err @ SdkError::Http(HttpError::AuthRequired)) => Err(err),
            Err(err) => {
                tracing::warn!(error = %err, "graph connectivity probe failed");
                Ok(false)
            }
        }
    }
}

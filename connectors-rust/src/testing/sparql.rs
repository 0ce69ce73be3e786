use std::{collections::VecDeque, sync::Mutex};

use crate::{
    sparql::{Binding, SparqlEndpoint, SparqlResults},
    ConnectorError, ConnectorResult,
};

#[derive(Default)]
struct MockSparqlState {
    mocked_results: VecDeque<ConnectorResult<SparqlResults>>,
    tracked_queries: Vec<String>,
}

/// A mock SPARQL endpoint that records every query and answers with
/// enqueued rows or errors, in order.
pub struct MockSparqlEndpoint {
    endpoint: String,
    state: Mutex<MockSparqlState>,
}

impl Default for MockSparqlEndpoint {
    fn default() -> Self {
        Self {
            endpoint: "mock://sparql".to_string(),
            state: Mutex::new(MockSparqlState::default()),
        }
    }
}

impl MockSparqlEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a successful answer with the given rows.
    pub fn enqueue_bindings(&self, bindings: Vec<Binding>) -> &Self {
        self.enqueue(Ok(SparqlResults { bindings }))
    }

    /// Enqueue a failed answer.
    pub fn enqueue_error(&self, error: ConnectorError) -> &Self {
        self.enqueue(Err(error))
    }

    fn enqueue(&self, result: ConnectorResult<SparqlResults>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_results.push_back(result);
        drop(state);
        self
    }

    /// Retrieve the query texts received so far.
    pub fn tracked_queries(&self) -> Vec<String> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_queries.clone()
    }
}

#[async_trait::async_trait]
impl SparqlEndpoint for MockSparqlEndpoint {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn select(&self, query: &str) -> ConnectorResult<SparqlResults> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_queries.push(query.to_string());

        state.mocked_results.pop_front().unwrap_or_else(|| {
            Err(ConnectorError::Invariant(
                "mock",
                "no mocked sparql results available".into(),
            ))
        })
    }
}

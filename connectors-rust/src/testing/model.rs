use std::{collections::VecDeque, sync::Mutex};

use crate::{
    ConnectorError, ConnectorResult, LanguageModel, LanguageModelInput, ModelResponse, Part,
};

/// What the next `generate` call of a [`MockLanguageModel`] yields.
pub enum MockGenerateResult {
    Response(ModelResponse),
    Error(ConnectorError),
}

impl MockGenerateResult {
    pub fn response(response: ModelResponse) -> Self {
        Self::Response(response)
    }

    /// A completed response whose only part is `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Response(ModelResponse {
            content: vec![Part::text(text)],
            finish_reason: Some("STOP".to_string()),
            ..Default::default()
        })
    }

    pub fn error(error: ConnectorError) -> Self {
        Self::Error(error)
    }
}

impl From<ModelResponse> for MockGenerateResult {
    fn from(response: ModelResponse) -> Self {
        Self::Response(response)
    }
}

impl From<ConnectorResult<ModelResponse>> for MockGenerateResult {
    fn from(result: ConnectorResult<ModelResponse>) -> Self {
        result.map_or_else(Self::Error, Self::Response)
    }
}

#[derive(Default)]
struct MockModelState {
    queued: VecDeque<MockGenerateResult>,
    inputs: Vec<LanguageModelInput>,
}

/// A [`LanguageModel`] that answers from a queue and records every input.
/// An exhausted queue answers with [`ConnectorError::Invariant`].
pub struct MockLanguageModel {
    provider: &'static str,
    model_id: String,
    state: Mutex<MockModelState>,
}

impl Default for MockLanguageModel {
    fn default() -> Self {
        Self {
            provider: "mock",
            model_id: "mock-model".to_string(),
            state: Mutex::new(MockModelState::default()),
        }
    }
}

impl MockLanguageModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_model_id<S: Into<String>>(&mut self, model_id: S) {
        self.model_id = model_id.into();
    }

    /// Queue results, answered in order.
    pub fn enqueue_generate_results<I>(&self, results: I) -> &Self
    where
        I: IntoIterator<Item = MockGenerateResult>,
    {
        self.state
            .lock()
            .expect("mock state poisoned")
            .queued
            .extend(results);
        self
    }

    pub fn enqueue_generate<R>(&self, result: R) -> &Self
    where
        R: Into<MockGenerateResult>,
    {
        self.enqueue_generate_results([result.into()])
    }

    /// Inputs received so far, oldest first.
    pub fn tracked_generate_inputs(&self) -> Vec<LanguageModelInput> {
        self.state.lock().expect("mock state poisoned").inputs.clone()
    }

    /// Drop queued results and recorded inputs.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.queued.clear();
        state.inputs.clear();
    }
}

#[async_trait::async_trait]
impl LanguageModel for MockLanguageModel {
    fn provider(&self) -> &'static str {
        self.provider
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn generate(&self, input: LanguageModelInput) -> ConnectorResult<ModelResponse> {
        let next = {
            let mut state = self.state.lock().expect("mock state poisoned");
            state.inputs.push(input);
            state.queued.pop_front()
        };

        match next {
            Some(MockGenerateResult::Response(response)) => Ok(response),
            Some(MockGenerateResult::Error(error)) => Err(error),
            None => Err(ConnectorError::Invariant(
                self.provider,
                "mock model has no queued results".to_string(),
            )),
        }
    }
}

use crate::{ConnectorResult, LanguageModelInput, ModelResponse, ModelUsage};
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

struct LmSpan {
    span: Span,
    usage: Option<ModelUsage>,
    finish_reason: Option<String>,
    start_time: Instant,
    max_tokens: Option<u32>,
    temperature: Option<f64>,
    top_p: Option<f64>,
    top_k: Option<i32>,
    seed: Option<i64>,
}

impl LmSpan {
    fn new(provider: &str, model_id: &str, input: &LanguageModelInput) -> Self {
        let span = info_span!("arte_connectors.generate");
        span.set_attribute("gen_ai.operation.name", "generate_content");
        span.set_attribute("gen_ai.provider.name", provider.to_string());
        span.set_attribute("gen_ai.request.model", model_id.to_string());
        span.set_attribute(
            "gen_ai.output.type",
            if input.response_format.is_some() {
                "json"
            } else {
                "text"
            },
        );

        Self {
            span,
            usage: None,
            finish_reason: None,
            start_time: Instant::now(),
            max_tokens: input.max_tokens,
            temperature: input.temperature,
            top_p: input.top_p,
            top_k: input.top_k,
            seed: input.seed,
        }
    }

    fn on_response(&mut self, response: &ModelResponse) {
        self.usage.clone_from(&response.usage);
        self.finish_reason.clone_from(&response.finish_reason);
    }

    fn on_error(&self, error: &(dyn std::error::Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    fn on_end(&self) {
        if let Some(usage) = &self.usage {
            self.span
                .set_attribute("gen_ai.usage.input_tokens", i64::from(usage.input_tokens));
            self.span
                .set_attribute("gen_ai.usage.output_tokens", i64::from(usage.output_tokens));
        }
        if let Some(finish_reason) = &self.finish_reason {
            self.span
                .set_attribute("gen_ai.response.finish_reasons", finish_reason.clone());
        }
        if let Some(max_tokens) = self.max_tokens {
            self.span
                .set_attribute("gen_ai.request.max_tokens", i64::from(max_tokens));
        }
        if let Some(temperature) = self.temperature {
            self.span
                .set_attribute("gen_ai.request.temperature", temperature);
        }
        if let Some(top_p) = self.top_p {
            self.span.set_attribute("gen_ai.request.top_p", top_p);
        }
        if let Some(top_k) = self.top_k {
            self.span
                .set_attribute("gen_ai.request.top_k", i64::from(top_k));
        }
        if let Some(seed) = self.seed {
            self.span.set_attribute("gen_ai.request.seed", seed);
        }
        self.span.set_attribute(
            "arte_connectors.duration_seconds",
            self.start_time.elapsed().as_secs_f64(),
        );
    }
}

pub async fn trace_generate<F, Fut>(
    provider: &str,
    model_id: &str,
    input: LanguageModelInput,
    f: F,
) -> ConnectorResult<ModelResponse>
where
    F: FnOnce(LanguageModelInput) -> Fut,
    Fut: std::future::Future<Output = ConnectorResult<ModelResponse>>,
{
    let mut span = LmSpan::new(provider, model_id, &input);
    let result = f(input).instrument(span.span.clone()).await;

    match &result {
        Ok(response) => span.on_response(response),
        Err(error) => span.on_error(error),
    }

    span.on_end();
    result
}

/// Wrap a SPARQL `SELECT` in a span carrying the endpoint, the query text and
/// the number of returned rows.
pub async fn trace_query<Fut, T>(
    endpoint: &str,
    query: &str,
    rows: impl FnOnce(&T) -> usize,
    future: Fut,
) -> ConnectorResult<T>
where
    Fut: std::future::Future<Output = ConnectorResult<T>>,
{
    let span = info_span!("arte_connectors.sparql.select");
    span.set_attribute("db.system", "sparql");
    span.set_attribute("server.address", endpoint.to_string());
    span.set_attribute("db.query.text", query.to_string());

    let start_time = Instant::now();
    let result = future.instrument(span.clone()).await;

    match &result {
        Ok(value) => {
            let count = i64::try_from(rows(value)).unwrap_or(i64::MAX);
            span.set_attribute("db.response.returned_rows", count);
        }
        Err(error) => {
            span.set_attribute("exception.message", error.to_string());
            span.set_status(Status::error(error.to_string()));
        }
    }
    span.set_attribute(
        "arte_connectors.duration_seconds",
        start_time.elapsed().as_secs_f64(),
    );

    result
}

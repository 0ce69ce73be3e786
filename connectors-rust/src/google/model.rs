use super::api::{
    Content, GenerateContentConfig, GenerateContentParameters, GenerateContentResponse,
    Part as GooglePart, UsageMetadata,
};
use crate::{
    client_utils, ConnectorError, ConnectorResult, LanguageModel, LanguageModelInput, Message,
    ModelResponse, ModelUsage, Part, ReasoningPart, ResponseFormatOption,
};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use std::collections::HashMap;

const PROVIDER: &str = "google";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GoogleModel {
    model_id: String,
    api_key: String,
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct GoogleModelOptions {
    pub api_key: String,
    pub base_url: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl GoogleModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: GoogleModelOptions) -> Self {
        let GoogleModelOptions {
            api_key,
            base_url,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let headers = headers.unwrap_or_default();

        Self {
            model_id: model_id.into(),
            api_key,
            base_url,
            client,
            headers,
        }
    }

    /// The key travels in a header so it never appears in request URLs,
    /// which transport errors echo back.
    fn request_headers(&self) -> ConnectorResult<HeaderMap> {
        let mut headers = client_utils::build_headers(PROVIDER, &self.headers)?;

        let mut api_key = HeaderValue::from_str(&self.api_key).map_err(|error| {
            ConnectorError::InvalidInput(format!("Invalid Google API key header value: {error}"))
        })?;
        api_key.set_sensitive(true);
        headers.insert("x-goog-api-key", api_key);

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl LanguageModel for GoogleModel {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn generate(&self, input: LanguageModelInput) -> ConnectorResult<ModelResponse> {
        crate::opentelemetry::trace_generate(
            self.provider(),
            &self.model_id,
            input,
            |input| async move {
                let params = convert_to_generate_content_parameters(input)?;

                let url = format!("{}/models/{}:generateContent", self.base_url, self.model_id);

                let headers = self.request_headers()?;
                let response: GenerateContentResponse =
                    client_utils::send_json(&self.client, &url, &params, headers).await?;

                map_google_response(response)
            },
        )
        .await
    }
}

fn convert_to_generate_content_parameters(
    input: LanguageModelInput,
) -> ConnectorResult<GenerateContentParameters> {
    if input.messages.is_empty() {
        return Err(ConnectorError::InvalidInput(
            "At least one message is required".to_string(),
        ));
    }

    let mut params = GenerateContentParameters {
        contents: convert_to_google_contents(input.messages),
        ..Default::default()
    };

    if let Some(system_prompt) = input.system_prompt {
        params.system_instruction = Some(Content {
            role: Some("system".to_string()),
            parts: Some(vec![GooglePart {
                text: Some(system_prompt),
                ..Default::default()
            }]),
        });
    }

    let mut config = GenerateContentConfig {
        temperature: input.temperature,
        top_p: input.top_p,
        top_k: input.top_k,
        max_output_tokens: input.max_tokens,
        seed: input.seed,
        ..Default::default()
    };

    if let Some(response_format) = input.response_format {
        match response_format {
            ResponseFormatOption::Text => {
                config.response_mime_type = Some("text/plain".to_string());
            }
            ResponseFormatOption::Json(json_format) => {
                config.response_mime_type = Some("application/json".to_string());
                config.response_json_schema = json_format.schema;
            }
        }
    }

    params.generation_config = Some(config);

    Ok(params)
}

fn convert_to_google_contents(messages: Vec<Message>) -> Vec<Content> {
    messages
        .into_iter()
        .map(|message| {
            let (role, content) = match message {
                Message::User(user_message) => ("user", user_message.content),
                Message::Assistant(assistant_message) => ("model", assistant_message.content),
            };
            Content {
                role: Some(role.to_string()),
                parts: Some(content.into_iter().map(convert_to_google_part).collect()),
            }
        })
        .collect()
}

fn convert_to_google_part(part: Part) -> GooglePart {
    match part {
        Part::Text(text_part) => GooglePart {
            text: Some(text_part.text),
            ..Default::default()
        },
        Part::Reasoning(reasoning_part) => GooglePart {
            text: Some(reasoning_part.text),
            thought: Some(true),
        },
    }
}

fn map_google_response(response: GenerateContentResponse) -> ConnectorResult<ModelResponse> {
    if let Some(block_reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_ref())
    {
        let message = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason_message.clone())
            .unwrap_or_default();
        return Err(ConnectorError::Refusal(
            format!("Prompt blocked ({block_reason}) {message}")
                .trim_end()
                .to_string(),
        ));
    }

    let candidate = response
        .candidates
        .and_then(|c| c.into_iter().next())
        .ok_or_else(|| {
            ConnectorError::Invariant(PROVIDER, "No candidate in response".to_string())
        })?;

    let content = map_google_content(candidate.content.and_then(|c| c.parts).unwrap_or_default());

    Ok(ModelResponse {
        content,
        usage: response.usage_metadata.as_ref().map(map_google_usage_metadata),
        finish_reason: candidate.finish_reason,
    })
}

fn map_google_content(parts: Vec<GooglePart>) -> Vec<Part> {
    parts
        .into_iter()
        .filter_map(|part| {
            let text = part.text?;
            if part.thought.unwrap_or(false) {
                Some(Part::Reasoning(ReasoningPart { text }))
            } else {
                Some(Part::text(text))
            }
        })
        .collect()
}

fn map_google_usage_metadata(usage: &UsageMetadata) -> ModelUsage {
    ModelUsage {
        input_tokens: usage.prompt_token_count.unwrap_or(0),
        output_tokens: usage.candidates_token_count.unwrap_or(0)
            + usage.thoughts_token_count.unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResponseFormatJson;
    use serde_json::json;

    #[test]
    fn converts_structured_request() {
        let params = convert_to_generate_content_parameters(LanguageModelInput {
            system_prompt: Some("Be brief".to_string()),
            messages: vec![Message::user(vec![Part::text("Describe")])],
            response_format: Some(ResponseFormatOption::Json(ResponseFormatJson {
                name: "analysis".to_string(),
                description: None,
                schema: Some(json!({
                    "type": "object",
                    "properties": { "summary": { "type": "string" } },
                    "required": ["summary"]
                })),
            })),
            temperature: Some(0.5),
            ..Default::default()
        })
        .unwrap();

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["contents"][0]["role"], json!("user"));
        assert_eq!(value["contents"][0]["parts"][0]["text"], json!("Describe"));
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], json!("Be brief"));
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            json!("application/json")
        );
        assert_eq!(
            value["generationConfig"]["responseJsonSchema"]["required"],
            json!(["summary"])
        );
        assert!(value["generationConfig"].get("responseSchema").is_none());
        assert_eq!(value["generationConfig"]["temperature"], json!(0.5));
        assert!(value["generationConfig"].get("topK").is_none());
    }

    #[test]
    fn api_key_is_a_sensitive_header() {
        let model = GoogleModel::new(
            "gemini-test",
            GoogleModelOptions {
                api_key: "secret-key".to_string(),
                headers: Some(HashMap::from([("x-trace".to_string(), "1".to_string())])),
                ..Default::default()
            },
        );

        let headers = model.request_headers().unwrap();
        let api_key = headers.get("x-goog-api-key").unwrap();
        assert_eq!(api_key, "secret-key");
        assert!(api_key.is_sensitive());
        assert_eq!(headers.get("x-trace").unwrap(), "1");
        assert!(!format!("{headers:?}").contains("secret-key"));
    }

    #[test]
    fn rejects_empty_messages() {
        let err = convert_to_generate_content_parameters(LanguageModelInput::default()).unwrap_err();
        assert!(matches!(err, ConnectorError::InvalidInput(_)));
    }

    #[test]
    fn maps_thoughts_to_reasoning_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "thinking", "thought": true },
                        { "text": "{\"a\":" },
                        { "text": "1}" }
                    ]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 4, "thoughtsTokenCount": 2 }
        }))
        .unwrap();

        let mapped = map_google_response(response).unwrap();
        assert_eq!(mapped.content.len(), 3);
        assert!(matches!(mapped.content[0], Part::Reasoning(_)));
        assert_eq!(mapped.text().as_deref(), Some("{\"a\":1}"));
        assert_eq!(mapped.finish_reason.as_deref(), Some("STOP"));
        assert_eq!(
            mapped.usage,
            Some(ModelUsage {
                input_tokens: 10,
                output_tokens: 6
            })
        );
    }

    #[test]
    fn blocked_prompt_is_a_refusal() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();

        let err = map_google_response(response).unwrap_err();
        assert_eq!(err.to_string(), "Refusal: Prompt blocked (SAFETY)");
    }

    #[test]
    fn missing_candidates_is_an_invariant_error() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        let err = map_google_response(response).unwrap_err();
        assert!(matches!(err, ConnectorError::Invariant(PROVIDER, _)));
    }
}

use arte_connectors::{
    google::{GoogleModel, GoogleModelOptions},
    LanguageModel, LanguageModelInput, Message, Part, ResponseFormatJson, ResponseFormatOption,
};
use dotenvy::dotenv;
use serde_json::Value;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let model = GoogleModel::new(
        std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-3-flash-preview".to_string()),
        GoogleModelOptions {
            api_key: std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set"),
            ..Default::default()
        },
    );

    let schema = serde_json::json!({
        "type": "object",
        "properties": {
            "title": { "type": "string", "description": "Title of the painting" },
            "artist": { "type": "string" },
            "palette": {
                "type": "array",
                "items": { "type": "string", "description": "Hex color, e.g. #2C3E50" },
                "minItems": 3,
                "maxItems": 3
            },
            "mood": {
                "type": "string",
                "enum": ["calm", "dramatic", "joyful", "melancholic"]
            }
        },
        "required": ["title", "artist", "palette", "mood"],
        "additionalProperties": false
    });

    let response = model
        .generate(LanguageModelInput {
            system_prompt: Some("You are an art historian.".to_string()),
            messages: vec![Message::user(vec![Part::text(
                "Describe Vermeer's Girl with a Pearl Earring.",
            )])],
            response_format: Some(ResponseFormatOption::Json(ResponseFormatJson {
                name: "painting".to_string(),
                description: None,
                schema: Some(schema),
            })),
            ..Default::default()
        })
        .await
        .expect("model.generate failed");

    let text = response.text().expect("no text in response");
    let value: Value = serde_json::from_str(&text).expect("invalid JSON");

    println!("{}", serde_json::to_string_pretty(&value).unwrap());
    println!("{:#?}", response.usage);
}

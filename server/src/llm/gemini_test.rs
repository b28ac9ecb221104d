use super::*;

#[test]
fn parse_text_candidate() {
    let json = serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": "billing" }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 42, "candidatesTokenCount": 1, "totalTokenCount": 43 },
        "modelVersion": "gemini-2.5-flash-001"
    })
    .to_string();
    let resp = parse_response(&json, "gemini-2.5-flash").unwrap();
    assert_eq!(resp.text, "billing");
    assert_eq!(resp.model, "gemini-2.5-flash-001");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 42);
    assert_eq!(resp.output_tokens, 1);
}

#[test]
fn parse_joins_multiple_parts() {
    let json = serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": "Suggested Solution: " }, { "text": "clear cache." }] }
        }]
    })
    .to_string();
    let resp = parse_response(&json, "m").unwrap();
    assert_eq!(resp.text, "Suggested Solution: clear cache.");
    assert_eq!(resp.model, "m");
    assert_eq!(resp.input_tokens, 0);
}

#[test]
fn parse_max_tokens_finish_reason() {
    let json = serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": "cut" }] }, "finishReason": "MAX_TOKENS" }]
    })
    .to_string();
    assert_eq!(parse_response(&json, "m").unwrap().stop_reason, "max_tokens");
}

#[test]
fn parse_safety_block_without_content() {
    let json = serde_json::json!({
        "candidates": [{ "finishReason": "SAFETY" }]
    })
    .to_string();
    let resp = parse_response(&json, "m").unwrap();
    assert!(resp.text.is_empty());
    assert_eq!(resp.stop_reason, "refusal");
}

#[test]
fn parse_no_candidates_errors() {
    let json = serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string();
    assert!(matches!(parse_response(&json, "m"), Err(LlmError::ApiParse(_))));
}

#[test]
fn parse_invalid_json() {
    assert!(matches!(parse_response("{", "m"), Err(LlmError::ApiParse(_))));
}

#[test]
fn request_maps_roles_and_system_instruction() {
    let messages = [
        Message::user("first"),
        Message { role: "assistant".into(), content: "reply".into() },
    ];
    let body = build_request(64, "You are a support agent.", &messages);
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "systemInstruction": { "parts": [{ "text": "You are a support agent." }] },
            "contents": [
                { "role": "user", "parts": [{ "text": "first" }] },
                { "role": "model", "parts": [{ "text": "reply" }] }
            ],
            "generationConfig": { "maxOutputTokens": 64 }
        })
    );
}

#[test]
fn request_omits_blank_system_instruction() {
    let messages = [Message::user("x")];
    let json = serde_json::to_value(build_request(8, "", &messages)).unwrap();
    assert!(json.get("systemInstruction").is_none());
}

use super::*;

fn make_response(content: serde_json::Value) -> String {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": content,
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 100, "output_tokens": 50 }
    })
    .to_string()
}

#[test]
fn parse_text_response() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "billing" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text, "billing");
    assert_eq!(resp.model, "claude-sonnet-4-5-20250929");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 100);
    assert_eq!(resp.output_tokens, 50);
}

#[test]
fn parse_concatenates_text_blocks() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "Suggested Solution: " },
        { "type": "text", "text": "reset your password." }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text, "Suggested Solution: reset your password.");
}

#[test]
fn parse_thinking_blocks_are_skipped() {
    let json = make_response(serde_json::json!([
        { "type": "thinking", "thinking": "Let me think..." },
        { "type": "text", "text": "high" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text, "high");
}

#[test]
fn parse_unknown_blocks_are_skipped() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "hi" },
        { "type": "some_future_type", "data": {} }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text, "hi");
}

#[test]
fn parse_max_tokens_stop_reason() {
    let json = serde_json::json!({
        "content": [{ "type": "text", "text": "trunc" }],
        "model": "m",
        "stop_reason": "max_tokens",
        "usage": { "input_tokens": 1, "output_tokens": 2 }
    })
    .to_string();
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.stop_reason, "max_tokens");
}

#[test]
fn parse_null_stop_reason_defaults_to_end_turn() {
    let json = serde_json::json!({
        "content": [],
        "model": "m",
        "stop_reason": null,
        "usage": { "input_tokens": 1, "output_tokens": 0 }
    })
    .to_string();
    let resp = parse_response(&json).unwrap();
    assert!(resp.text.is_empty());
    assert_eq!(resp.stop_reason, "end_turn");
}

#[test]
fn parse_invalid_json() {
    let err = parse_response("not json").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn request_omits_empty_system() {
    let messages = [Message::user("hi")];
    let body = ApiRequest { model: "m", max_tokens: 16, system: "", messages: &messages };
    let json = serde_json::to_value(&body).unwrap();
    assert!(json.get("system").is_none());
    assert_eq!(json["messages"][0]["content"], "hi");
}
